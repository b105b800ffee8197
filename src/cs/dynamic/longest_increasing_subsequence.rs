//! Longest strictly increasing subsequence.
//!
//! Three interchangeable ways to compute the length (bottom-up DP, memoized
//! recursion, patience sorting) plus reconstruction of one optimal subsequence.

use log::{debug, trace};

/// Returns the length of the Longest Increasing Subsequence (LIS) in `numbers`
/// using bottom-up dynamic programming.
///
/// `best[i]` holds the length of the longest strictly increasing subsequence
/// that starts at index `i`. Every element alone has length 1, and positions
/// are filled from the back so that `best[j]` is final for all `j > i`.
///
/// Runs in O(n²) time and O(n) space. An empty slice yields 0.
///
/// # Examples
///
/// ```
/// use lg::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence_length;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence_length(&arr), 4);
/// // One possible LIS is [2, 5, 7, 101]
/// ```
pub fn longest_increasing_subsequence_length<T: Ord>(numbers: &[T]) -> usize {
    trace!("lis dp: {} elements", numbers.len());

    let mut best = vec![1_usize; numbers.len()];

    for i in (0..numbers.len()).rev() {
        for j in i + 1..numbers.len() {
            if numbers[j] > numbers[i] {
                best[i] = best[i].max(1 + best[j]);
            }
        }
    }

    // `max` over an empty slice is `None`, which is the empty-input case.
    let length = best.into_iter().max().unwrap_or(0);
    debug!("lis dp: length {}", length);
    length
}

/// Returns the length of the LIS in `numbers` using top-down recursion with
/// memoization.
///
/// The memo table is indexed by starting position and allocated for this call
/// only, so repeated calls never observe each other's state. Always agrees
/// with [`longest_increasing_subsequence_length`], including on long
/// ascending inputs where a front-to-back recursion would nest `n` deep.
///
/// # Examples
///
/// ```
/// use lg::cs::dynamic::longest_increasing_subsequence_length_memoized;
///
/// assert_eq!(longest_increasing_subsequence_length_memoized(&[0, 1, 0, 3, 2, 3]), 4);
/// assert_eq!(longest_increasing_subsequence_length_memoized::<i32>(&[]), 0);
/// ```
pub fn longest_increasing_subsequence_length_memoized<T: Ord>(numbers: &[T]) -> usize {
    trace!("lis memoized: {} elements", numbers.len());

    let mut memo: Vec<Option<usize>> = vec![None; numbers.len()];
    // Starting from the back keeps every later index memoized before it is
    // needed, so recursion never goes deeper than two frames.
    let length = (0..numbers.len())
        .rev()
        .map(|start| longest_from(numbers, start, &mut memo))
        .max()
        .unwrap_or(0);

    debug!("lis memoized: length {}", length);
    length
}

/// Length of the longest strictly increasing subsequence beginning at `start`.
fn longest_from<T: Ord>(numbers: &[T], start: usize, memo: &mut [Option<usize>]) -> usize {
    if start >= numbers.len() {
        return 0;
    }
    if let Some(cached) = memo[start] {
        return cached;
    }

    let mut length = 1;
    for next in start + 1..numbers.len() {
        if numbers[next] > numbers[start] {
            length = length.max(1 + longest_from(numbers, next, memo));
        }
    }

    memo[start] = Some(length);
    length
}

/// Returns the length of the LIS in `numbers` in O(n log n) time.
///
/// `tails[k]` is the smallest value that can end an increasing subsequence of
/// length `k + 1`. Each element either extends `tails` or lowers the first
/// entry that is not smaller than it.
///
/// # Examples
///
/// ```
/// use lg::cs::dynamic::longest_increasing_subsequence_length_patience;
///
/// assert_eq!(longest_increasing_subsequence_length_patience(&[7, 7, 7, 7]), 1);
/// ```
pub fn longest_increasing_subsequence_length_patience<T: Ord + Clone>(numbers: &[T]) -> usize {
    let mut tails: Vec<T> = Vec::with_capacity(numbers.len());

    for num in numbers {
        // An equal value lands on its twin, so equal values never extend the
        // sequence.
        match tails.binary_search(num) {
            Ok(pos) | Err(pos) => {
                if pos == tails.len() {
                    tails.push(num.clone());
                } else {
                    tails[pos] = num.clone();
                }
            }
        }
    }

    debug!("lis patience: length {}", tails.len());
    tails.len()
}

/// Returns one actual Longest Increasing Subsequence (LIS) in `numbers`.
///
/// This uses the same method as
/// [`longest_increasing_subsequence_length_patience`], but keeps track of the
/// predecessor of each element so that one valid subsequence can be
/// reconstructed. If several subsequences share the maximal length, just one
/// of them is returned.
///
/// # Examples
///
/// ```
/// use lg::cs::dynamic::longest_increasing_subsequence;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// let lis = longest_increasing_subsequence(&arr);
/// assert_eq!(lis.len(), 4);
/// ```
pub fn longest_increasing_subsequence<T: Ord + Clone>(numbers: &[T]) -> Vec<T> {
    // tails_index[k] = index in `numbers` of the last element of the best
    // increasing subsequence of length k+1 seen so far
    let mut tails_index: Vec<usize> = Vec::with_capacity(numbers.len());
    let mut prev_index: Vec<Option<usize>> = vec![None; numbers.len()];

    for (i, num) in numbers.iter().enumerate() {
        let pos = match tails_index.binary_search_by(|&idx| numbers[idx].cmp(num)) {
            Ok(pos) | Err(pos) => pos,
        };

        if pos == tails_index.len() {
            tails_index.push(i);
        } else {
            tails_index[pos] = i;
        }

        if pos > 0 {
            prev_index[i] = Some(tails_index[pos - 1]);
        }
    }

    let mut lis = Vec::with_capacity(tails_index.len());
    let mut curr = tails_index.last().copied();
    while let Some(idx) = curr {
        lis.push(numbers[idx].clone());
        curr = prev_index[idx];
    }
    lis.reverse();
    lis
}
