use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

/// Reads a sequence and a target from a file.
///
/// Input format:
/// - first non-empty line: the sequence, comma-separated integers,
/// - second non-empty line: the target.
///
/// <div class="warning">
///
/// > Blank lines are skipped, so an empty sequence cannot be written in
/// > this format, build it at the call site instead.
/// > Keep the sequence short, the tree has 2^(N+1) - 1 nodes.
///
/// </div>
///
/// Example input:
/// ```text
/// 1,1,1
/// 2
/// ```
pub fn from_file(path: &str) -> (Vec<i64>, i64) {
    let file = File::open(path).expect("File should exist and be readable");
    let reader = BufReader::new(file);
    parse_from_custom_format(reader)
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> (Vec<i64>, i64) {
    let cursor = Cursor::new(input);
    let reader = BufReader::new(cursor);
    parse_from_custom_format(reader)
}

fn parse_from_custom_format<R: BufRead>(reader: R) -> (Vec<i64>, i64) {
    let mut lines = reader.lines().filter_map(|line| {
        let line = line.expect("Line should be readable");
        let line = line.trim().to_string();
        if line.is_empty() { None } else { Some(line) }
    });

    let sequence_line = lines
        .next()
        .expect("Input should have a sequence line and a target line");
    let target_line = lines
        .next()
        .expect("Input should have a target line after the sequence");

    let sequence: Vec<i64> = sequence_line
        .split(',')
        .map(|part| {
            part.trim()
                .parse()
                .expect("Sequence entry should be an integer")
        })
        .collect();
    let target: i64 = target_line
        .parse()
        .expect("Target should be an integer");

    (sequence, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let (sequence, target) = from_str("1,1,1\n2\n");
        assert_eq!(sequence, vec![1, 1, 1]);
        assert_eq!(target, 2);
    }

    #[test]
    fn test_from_str_whitespace_and_negatives() {
        let (sequence, target) = from_str("\n  2, -3 , 5\n\n -4 \n");
        assert_eq!(sequence, vec![2, -3, 5]);
        assert_eq!(target, -4);
    }
}
