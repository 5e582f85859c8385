//! A small index-addressed adapter over `Vec<i64>`, used by the integration
//! suites. Addresses are element indices; an out-of-range address is a no-op
//! (adapter policy, same as the shipped adapters).

use patchkit::{MutatingPatchable, PatchType, Patchable};

pub struct IndexVec;

fn added(mut current: Vec<i64>, new: Vec<i64>, address: &usize) -> Vec<i64> {
    let at = (*address).min(current.len());
    current.splice(at..at, new);
    current
}

fn removed(mut current: Vec<i64>, address: &usize) -> Vec<i64> {
    if *address < current.len() {
        current.remove(*address);
    }
    current
}

fn replaced(mut current: Vec<i64>, new: Vec<i64>, address: &usize) -> Vec<i64> {
    if *address < current.len() {
        current.splice(*address..*address + 1, new);
    }
    current
}

fn copied(mut current: Vec<i64>, from: &usize, to: &usize) -> Vec<i64> {
    if let Some(v) = current.get(*from).copied() {
        let at = (*to).min(current.len());
        current.insert(at, v);
    }
    current
}

fn moved(mut current: Vec<i64>, from: &usize, to: &usize) -> Vec<i64> {
    if *from < current.len() {
        let v = current.remove(*from);
        let at = (*to).min(current.len());
        current.insert(at, v);
    }
    current
}

fn test(current: &Vec<i64>, expected: &Vec<i64>, address: &usize) -> bool {
    current.get(*address..*address + expected.len()) == Some(expected.as_slice())
}

fn add_in_place(current: &mut Vec<i64>, new: Vec<i64>, address: &usize) {
    let at = (*address).min(current.len());
    current.splice(at..at, new);
}

fn remove_in_place(current: &mut Vec<i64>, address: &usize) {
    if *address < current.len() {
        current.remove(*address);
    }
}

fn replace_in_place(current: &mut Vec<i64>, new: Vec<i64>, address: &usize) {
    if *address < current.len() {
        current.splice(*address..*address + 1, new);
    }
}

fn copy_in_place(current: &mut Vec<i64>, from: &usize, to: &usize) {
    if let Some(v) = current.get(*from).copied() {
        let at = (*to).min(current.len());
        current.insert(at, v);
    }
}

fn move_in_place(current: &mut Vec<i64>, from: &usize, to: &usize) {
    if *from < current.len() {
        let v = current.remove(*from);
        let at = (*to).min(current.len());
        current.insert(at, v);
    }
}

impl PatchType for IndexVec {
    type Content = Vec<i64>;
    type Address = usize;

    fn empty_content() -> Vec<i64> {
        Vec::new()
    }

    fn patcher() -> Patchable<Self> {
        Patchable {
            added: Some(added),
            removed: Some(removed),
            replaced: Some(replaced),
            copied: Some(copied),
            moved: Some(moved),
            test: Some(test),
        }
    }

    fn mutating_patcher() -> Option<MutatingPatchable<Self>> {
        Some(MutatingPatchable {
            added: Some(add_in_place),
            removed: Some(remove_in_place),
            replaced: Some(replace_in_place),
            copied: Some(copy_in_place),
            moved: Some(move_in_place),
            test: Some(test),
        })
    }
}
