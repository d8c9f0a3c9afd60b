use rand::prelude::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const STRING_SIZE: usize = 24;

#[allow(dead_code)]
pub(crate) fn gen_random_usizes(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = rand::distributions::Uniform::new_inclusive(1usize, 40_000_000usize);
    (0..n).map(|_| rng.sample(dist)).collect()
}

/// Keys drawn from `0..distinct` so most of them repeat when `n > distinct`.
#[allow(dead_code)]
pub(crate) fn gen_repeating_keys(n: usize, distinct: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..distinct)).collect()
}

#[allow(dead_code)]
pub(crate) fn get_unique_random_strings(n: usize, seed: u64) -> Vec<String> {
    use std::collections::HashSet;

    let alphabet: Vec<char> = (0u8..0x7f)
        .filter(|x| x.is_ascii_alphanumeric())
        .map(|x| x as char)
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut res = HashSet::with_capacity(n);
    while res.len() < n {
        let s: String = alphabet[..]
            .choose_multiple(&mut rng, STRING_SIZE)
            .collect();
        res.insert(s);
    }
    res.into_iter().collect()
}

#[allow(dead_code)]
pub(crate) fn choose_some<T>(vals: &[T], num: usize, seed: u64) -> Vec<T>
where
    T: Clone,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    vals.choose_multiple(&mut rng, num).cloned().collect()
}

/// Splits the data in to parts:
/// 1. random shuffled rest for filling queue
/// 2. `number_for_insert` minimal items sorted in descending order,
///    so every insertion lifts new item up to the root
/// ## Panics
/// If number_for_insert bigger than data.len()
#[allow(dead_code)]
pub(crate) fn generate_worst_insert_data<T: Ord + Clone>(
    mut data: Vec<T>,
    number_for_insert: usize,
    seed: u64,
) -> (Vec<T>, Vec<T>) {
    assert!(
        number_for_insert <= data.len(),
        "number_for_insert {} MUST be less or equal data length {}",
        number_for_insert,
        data.len()
    );
    data.sort_unstable_by(|a, b| b.cmp(a));
    let remain_length = data.len() - number_for_insert;
    let for_inserts = data[remain_length..].to_vec();
    data.truncate(remain_length);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    data.shuffle(&mut rng);
    (data, for_inserts)
}
