//! Post-processing passes over a raw diff.
//!
//! - `cleanup_merge` normalizes the chunk list: adjacent edits are merged,
//!   shared prefixes/suffixes are factored out into equalities, and single
//!   edits are slid across neighbouring equalities when that removes one.
//! - `cleanup_semantic` trades minimality for readability: short equalities
//!   wedged between edits are folded into the edits, edit boundaries are
//!   moved onto line/word breaks, and delete/insert overlaps are extracted.
//!
//! None of the passes changes what the chunks reconstruct.

use super::engine::Chunk;
use super::script::Operation;

/// Merge adjacent chunks and shift single edits sideways
pub(crate) fn cleanup_merge(diffs: &mut Vec<Chunk>) {
    diffs.retain(|(_, text)| !text.is_empty());
    // Sentinel equality flushes the final run of edits
    diffs.push((Operation::Equal, Vec::new()));

    let mut pointer = 0;
    let mut count_delete = 0;
    let mut count_insert = 0;
    let mut text_delete: Vec<char> = Vec::new();
    let mut text_insert: Vec<char> = Vec::new();

    while pointer < diffs.len() {
        match diffs[pointer].0 {
            Operation::Insert => {
                count_insert += 1;
                text_insert.extend_from_slice(&diffs[pointer].1);
                pointer += 1;
            }
            Operation::Delete => {
                count_delete += 1;
                text_delete.extend_from_slice(&diffs[pointer].1);
                pointer += 1;
            }
            Operation::Equal => {
                if count_delete + count_insert > 1 {
                    let run_start = pointer - count_delete - count_insert;

                    if count_delete != 0 && count_insert != 0 {
                        let prefix = common_prefix(&text_insert, &text_delete);
                        if prefix != 0 {
                            let shared: Vec<char> = text_insert[..prefix].to_vec();
                            if run_start > 0 && diffs[run_start - 1].0 == Operation::Equal {
                                diffs[run_start - 1].1.extend(shared);
                            } else {
                                diffs.insert(run_start, (Operation::Equal, shared));
                                pointer += 1;
                            }
                            text_insert.drain(..prefix);
                            text_delete.drain(..prefix);
                        }

                        let suffix = common_suffix(&text_insert, &text_delete);
                        if suffix != 0 {
                            let split = text_insert.len() - suffix;
                            let mut shared = text_insert.split_off(split);
                            shared.extend_from_slice(&diffs[pointer].1);
                            diffs[pointer].1 = shared;
                            text_delete.truncate(text_delete.len() - suffix);
                        }
                    }

                    // Replace the run with at most one delete and one insert
                    let mut merged = Vec::with_capacity(2);
                    if !text_delete.is_empty() {
                        merged.push((Operation::Delete, std::mem::take(&mut text_delete)));
                    }
                    if !text_insert.is_empty() {
                        merged.push((Operation::Insert, std::mem::take(&mut text_insert)));
                    }
                    let run_start = pointer - count_delete - count_insert;
                    let merged_len = merged.len();
                    diffs.splice(run_start..pointer, merged);
                    // Revisit the equality so it can join a preceding one
                    pointer = run_start + merged_len;
                } else if pointer != 0 && diffs[pointer - 1].0 == Operation::Equal {
                    // Two equalities in a row
                    let text = diffs.remove(pointer).1;
                    diffs[pointer - 1].1.extend(text);
                } else {
                    pointer += 1;
                }

                count_delete = 0;
                count_insert = 0;
                text_delete.clear();
                text_insert.clear();
            }
        }
    }

    if diffs.last().is_some_and(|(_, text)| text.is_empty()) {
        diffs.pop();
    }

    // Second pass: slide single edits surrounded by equalities,
    // e.g. A<ins>BA</ins>C -> <ins>AB</ins>AC
    let mut changes = false;
    let mut pointer = 1;
    while pointer + 1 < diffs.len() {
        if diffs[pointer - 1].0 == Operation::Equal && diffs[pointer + 1].0 == Operation::Equal {
            let prev_len = diffs[pointer - 1].1.len();
            let next_len = diffs[pointer + 1].1.len();
            let edit = &diffs[pointer].1;

            if prev_len > 0 && edit.ends_with(&diffs[pointer - 1].1) {
                // Shift the edit over the previous equality
                let prev = diffs[pointer - 1].1.clone();
                let mut shifted = prev.clone();
                shifted.extend_from_slice(&edit[..edit.len() - prev_len]);
                diffs[pointer].1 = shifted;

                let mut next = prev;
                next.extend_from_slice(&diffs[pointer + 1].1);
                diffs[pointer + 1].1 = next;

                diffs.remove(pointer - 1);
                changes = true;
            } else if next_len > 0 && edit.starts_with(&diffs[pointer + 1].1) {
                // Shift the edit over the next equality
                let next = diffs[pointer + 1].1.clone();
                let mut shifted = edit[next_len..].to_vec();
                shifted.extend_from_slice(&next);
                diffs[pointer].1 = shifted;
                diffs[pointer - 1].1.extend_from_slice(&next);

                diffs.remove(pointer + 1);
                changes = true;
            }
        }
        pointer += 1;
    }

    // A shift can expose new merge opportunities
    if changes {
        cleanup_merge(diffs);
    }
}

/// Fold semantically trivial equalities into the surrounding edits
pub(crate) fn cleanup_semantic(diffs: &mut Vec<Chunk>) {
    let mut changes = false;
    // Stack of equality indices
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<usize> = None;
    let mut pointer = 0;
    // Edit lengths before and after the last equality
    let mut insertions_before = 0;
    let mut deletions_before = 0;
    let mut insertions_after = 0;
    let mut deletions_after = 0;

    while pointer < diffs.len() {
        if diffs[pointer].0 == Operation::Equal {
            equalities.push(pointer);
            insertions_before = insertions_after;
            deletions_before = deletions_after;
            insertions_after = 0;
            deletions_after = 0;
            last_equality = Some(diffs[pointer].1.len());
            pointer += 1;
            continue;
        }

        if diffs[pointer].0 == Operation::Insert {
            insertions_after += diffs[pointer].1.len();
        } else {
            deletions_after += diffs[pointer].1.len();
        }

        // An equality no longer than the edits on both sides of it
        let eliminate = matches!(last_equality, Some(len) if len > 0
            && len <= insertions_before.max(deletions_before)
            && len <= insertions_after.max(deletions_after));

        if eliminate {
            if let Some(index) = equalities.pop() {
                let text = diffs[index].1.clone();
                diffs.insert(index, (Operation::Delete, text));
                diffs[index + 1].0 = Operation::Insert;
            }
            // The previous equality needs to be reevaluated too
            equalities.pop();
            pointer = equalities.last().map_or(0, |&i| i + 1);

            insertions_before = 0;
            deletions_before = 0;
            insertions_after = 0;
            deletions_after = 0;
            last_equality = None;
            changes = true;
            continue;
        }

        pointer += 1;
    }

    if changes {
        cleanup_merge(diffs);
    }
    cleanup_semantic_lossless(diffs);
    extract_overlaps(diffs);
    diffs.retain(|(_, text)| !text.is_empty());
}

/// Turn delete/insert pairs that overlap by at least half of either
/// edit into delete/equal/insert
///
/// e.g. `<del>abcxxx</del><ins>xxxdef</ins>` -> `<del>abc</del>xxx<ins>def</ins>`
fn extract_overlaps(diffs: &mut Vec<Chunk>) {
    let mut pointer = 1;
    while pointer < diffs.len() {
        if diffs[pointer - 1].0 == Operation::Delete && diffs[pointer].0 == Operation::Insert {
            let deletion = diffs[pointer - 1].1.clone();
            let insertion = diffs[pointer].1.clone();
            let overlap_forward = common_overlap(&deletion, &insertion);
            let overlap_reverse = common_overlap(&insertion, &deletion);

            if overlap_forward >= overlap_reverse {
                if overlap_forward * 2 >= deletion.len() || overlap_forward * 2 >= insertion.len() {
                    diffs.insert(pointer, (Operation::Equal, insertion[..overlap_forward].to_vec()));
                    diffs[pointer - 1].1 = deletion[..deletion.len() - overlap_forward].to_vec();
                    diffs[pointer + 1].1 = insertion[overlap_forward..].to_vec();
                    pointer += 1;
                }
            } else if overlap_reverse * 2 >= deletion.len() || overlap_reverse * 2 >= insertion.len()
            {
                // Reverse overlap: swap the edits around the shared text
                diffs.insert(pointer, (Operation::Equal, deletion[..overlap_reverse].to_vec()));
                diffs[pointer - 1] = (
                    Operation::Insert,
                    insertion[..insertion.len() - overlap_reverse].to_vec(),
                );
                diffs[pointer + 1] = (Operation::Delete, deletion[overlap_reverse..].to_vec());
                pointer += 1;
            }
            pointer += 1;
        }
        pointer += 1;
    }
}

/// Slide single edits between two equalities onto the best boundary,
/// e.g. `The c<ins>at c</ins>ame.` -> `The <ins>cat </ins>came.`
pub(crate) fn cleanup_semantic_lossless(diffs: &mut Vec<Chunk>) {
    let mut pointer = 1;
    while pointer + 1 < diffs.len() {
        if diffs[pointer - 1].0 == Operation::Equal && diffs[pointer + 1].0 == Operation::Equal {
            let mut equality1 = diffs[pointer - 1].1.clone();
            let mut edit = diffs[pointer].1.clone();
            let mut equality2 = diffs[pointer + 1].1.clone();

            // First, shift the edit as far left as possible
            let offset = common_suffix(&equality1, &edit);
            if offset > 0 {
                let common: Vec<char> = edit[edit.len() - offset..].to_vec();
                equality1.truncate(equality1.len() - offset);
                let mut shifted = common.clone();
                shifted.extend_from_slice(&edit[..edit.len() - offset]);
                edit = shifted;
                let mut after = common;
                after.extend_from_slice(&equality2);
                equality2 = after;
            }

            // Second, step right one char at a time looking for the best fit
            let mut best_equality1 = equality1.clone();
            let mut best_edit = edit.clone();
            let mut best_equality2 = equality2.clone();
            let mut best_score = boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);

            while !edit.is_empty() && !equality2.is_empty() && edit[0] == equality2[0] {
                let c = edit.remove(0);
                equality1.push(c);
                edit.push(equality2.remove(0));

                let score = boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);
                // >= prefers trailing over leading whitespace on edits
                if score >= best_score {
                    best_score = score;
                    best_equality1 = equality1.clone();
                    best_edit = edit.clone();
                    best_equality2 = equality2.clone();
                }
            }

            if diffs[pointer - 1].1 != best_equality1 {
                if best_equality1.is_empty() {
                    diffs.remove(pointer - 1);
                    pointer -= 1;
                } else {
                    diffs[pointer - 1].1 = best_equality1;
                }
                diffs[pointer].1 = best_edit;
                if best_equality2.is_empty() {
                    diffs.remove(pointer + 1);
                    pointer = pointer.saturating_sub(1);
                } else {
                    diffs[pointer + 1].1 = best_equality2;
                }
            }
        }
        pointer += 1;
    }
}

/// Score how well the boundary between two texts falls on a natural break
///
/// 6 = edge of text, 5 = blank line, 4 = line break, 3 = end of sentence,
/// 2 = whitespace, 1 = punctuation, 0 = inside a word.
fn boundary_score(one: &[char], two: &[char]) -> u32 {
    let (Some(&char1), Some(&char2)) = (one.last(), two.first()) else {
        return 6;
    };

    let non_alnum1 = !char1.is_alphanumeric();
    let non_alnum2 = !char2.is_alphanumeric();
    let whitespace1 = non_alnum1 && char1.is_whitespace();
    let whitespace2 = non_alnum2 && char2.is_whitespace();
    let line_break1 = whitespace1 && (char1 == '\r' || char1 == '\n');
    let line_break2 = whitespace2 && (char2 == '\r' || char2 == '\n');
    let blank_line1 = line_break1 && ends_with_blank_line(one);
    let blank_line2 = line_break2 && starts_with_blank_line(two);

    if blank_line1 || blank_line2 {
        5
    } else if line_break1 || line_break2 {
        4
    } else if non_alnum1 && !whitespace1 && whitespace2 {
        3
    } else if whitespace1 || whitespace2 {
        2
    } else if non_alnum1 || non_alnum2 {
        1
    } else {
        0
    }
}

/// `\n\r?\n$`
fn ends_with_blank_line(text: &[char]) -> bool {
    text.ends_with(&['\n', '\n']) || text.ends_with(&['\n', '\r', '\n'])
}

/// `^\r?\n\r?\n`
fn starts_with_blank_line(text: &[char]) -> bool {
    let rest = match text {
        ['\r', '\n', rest @ ..] | ['\n', rest @ ..] => rest,
        _ => return false,
    };
    matches!(rest, ['\r', '\n', ..] | ['\n', ..])
}

fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Index of the first occurrence of `needle` in `haystack`
fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Length of the longest suffix of `one` that is a prefix of `two`
pub(crate) fn common_overlap(one: &[char], two: &[char]) -> usize {
    if one.is_empty() || two.is_empty() {
        return 0;
    }

    // Truncate the longer text
    let text_length = one.len().min(two.len());
    let one = &one[one.len() - text_length..];
    let two = &two[..text_length];
    if one == two {
        return text_length;
    }

    // Grow a candidate overlap, jumping to the next place its tail occurs
    let mut best = 0;
    let mut length = 1;
    while length <= text_length {
        let pattern = &one[text_length - length..];
        let Some(found) = find(two, pattern) else {
            return best;
        };
        length += found;
        if length > text_length {
            return best;
        }
        if found == 0 || one[text_length - length..] == two[..length] {
            best = length;
            length += 1;
        }
    }
    best
}
