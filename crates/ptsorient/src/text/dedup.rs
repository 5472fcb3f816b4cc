use std::collections::HashSet;

/// Drop every line whose exact text appeared earlier, anywhere before it.
///
/// Despite the usual meaning of "dedup" this is not adjacency-based. First
/// occurrences keep their relative order. The flag is `true` if anything was
/// removed.
pub fn dedup_global<T: AsRef<str>>(lines: Vec<T>) -> (Vec<T>, bool) {
    let keep: Vec<bool> = {
        let mut seen: HashSet<&str> = HashSet::with_capacity(lines.len());
        lines.iter().map(|l| seen.insert(l.as_ref())).collect()
    };
    let removed = keep.contains(&false);
    let out = lines
        .into_iter()
        .zip(keep)
        .filter_map(|(line, first)| first.then_some(line))
        .collect();
    (out, removed)
}
