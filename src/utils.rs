use std::collections::HashSet;
use std::hash::Hash;

#[inline(always)]
pub fn square_f64(n: f64) -> f64 {
    n * n
}

pub fn into_string_vec<T, I>(val: T) -> Vec<String> where T: AsRef<[I]>, I: ToString {
    val.as_ref()
        .iter()
        .map(ToString::to_string)
        .collect()
}

pub fn first_duplicate<'a, T, I>(iter: T) -> Option<&'a I> where T: Iterator<Item=&'a I>, I: Eq + Hash + 'a {
    let mut set = HashSet::<&'a I>::new();
    for item in iter {
        if !set.insert(item) {
            return Some(item);
        }
    }
    None
}
