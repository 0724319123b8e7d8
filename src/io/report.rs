//! LaTeX summary table of solvable board sizes

use ndarray::Array2;

/// Format the sweep's answer table as a LaTeX `tabular`
///
/// Rows and columns start at size 2; solvable combinations are marked with
/// the `\T` macro and the rest left blank. The caller decides where the
/// string goes.
pub fn latex_table(answers: &Array2<bool>) -> String {
    let height = answers.nrows();
    let width = answers.ncols();
    let mut out = String::new();

    out.push_str(r"\begin{tabular}{r");
    for _ in 2..width {
        out.push('c');
    }
    out.push_str("}\n");

    let mut header: Vec<String> = vec!["  ".to_string()];
    header.extend((2..width).map(|col| format!("{col:>2}")));
    out.push_str(&header.join("&"));
    out.push_str("\\\\\n");

    for row in 2..height {
        let mut cells = vec![format!("{row:>2}")];
        for col in 2..width {
            let mark = if answers.get([row, col]).copied().unwrap_or(false) {
                r"\T"
            } else {
                "  "
            };
            cells.push(mark.to_string());
        }
        out.push_str(&cells.join("&"));
        out.push_str("\\\\\n");
    }

    out.push_str("\\end{tabular}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::latex_table;
    use ndarray::Array2;

    #[test]
    fn test_marks_only_solvable_sizes() {
        let mut answers = Array2::from_elem((4, 4), false);
        if let Some(answer) = answers.get_mut([2, 3]) {
            *answer = true;
        }

        let table = latex_table(&answers);
        assert!(table.starts_with("\\begin{tabular}{rcc}"));
        assert!(table.contains(" 2&  &\\T\\\\"));
        assert!(table.contains(" 3&  &  \\\\"));
        assert!(table.ends_with("\\end{tabular}\n"));
    }
}
