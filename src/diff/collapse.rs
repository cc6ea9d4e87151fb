use super::types::DisplayLine;

/// Trim a unified diff down to its changes plus `context` unchanged lines
/// on either side of each change.
///
/// A gap between kept lines is replaced by a single ellipsis line, whatever
/// its size. When nothing changed the input comes back untouched.
pub fn collapse_context(lines: &[DisplayLine], context: usize) -> Vec<DisplayLine> {
    let changes: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.kind.is_change())
        .map(|(index, _)| index)
        .collect();

    if changes.is_empty() {
        return lines.to_vec();
    }

    let mut collapsed = Vec::new();
    let mut last_kept: Option<usize> = None;
    // First change at or after the current index
    let mut next_change = 0;

    for (index, line) in lines.iter().enumerate() {
        while next_change < changes.len() && changes[next_change] < index {
            next_change += 1;
        }

        let near_next = changes
            .get(next_change)
            .is_some_and(|&change| change - index <= context);
        let near_prev = next_change > 0 && index - changes[next_change - 1] <= context;
        if !(near_next || near_prev) {
            continue;
        }

        if let Some(last) = last_kept
            && index > last + 1
        {
            collapsed.push(DisplayLine::ellipsis());
        }
        collapsed.push(line.clone());
        last_kept = Some(index);
    }

    collapsed
}
