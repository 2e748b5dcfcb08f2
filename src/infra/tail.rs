use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Lines from the end of a log file plus the offset to poll from next.
#[derive(Clone, Debug, Default)]
pub struct LogTail {
    pub lines: Vec<String>,
    pub offset: u64,
}

/// Read at most `max_bytes` from the end of `path` and split into lines. A
/// partial first line (the seek landed mid-line) is dropped so the core only
/// ever sees whole records.
pub fn read_tail(path: &Path, max_bytes: usize) -> io::Result<LogTail> {
    let mut file = File::open(path)?;
    let size = file.metadata()?.len();
    let start = size.saturating_sub(max_bytes as u64);

    // Read one byte before `start` too: if it is a newline, `start` sits on
    // a line boundary and the first line is already complete.
    let read_from = start.saturating_sub(1);
    file.seek(SeekFrom::Start(read_from))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;

    let mid_line = start > 0 && buf.first() != Some(&b'\n');
    let body = if start > 0 { &buf[1..] } else { &buf[..] };

    let text = String::from_utf8_lossy(body);
    let mut lines: Vec<String> = text.lines().map(|line| line.to_string()).collect();
    if mid_line && !lines.is_empty() {
        lines.remove(0);
    }
    Ok(LogTail {
        lines,
        offset: size,
    })
}

/// Read lines appended since `offset`. Returns only complete lines; a
/// trailing partial line stays unread until its newline arrives.
pub fn read_appended(path: &Path, offset: u64) -> io::Result<LogTail> {
    let mut file = File::open(path)?;
    let size = file.metadata()?.len();
    if offset >= size {
        return Ok(LogTail {
            lines: Vec::new(),
            offset: size.min(offset),
        });
    }

    file.seek(SeekFrom::Start(offset))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;

    let complete = match buf.iter().rposition(|byte| *byte == b'\n') {
        Some(last_newline) => last_newline + 1,
        None => 0,
    };
    let text = String::from_utf8_lossy(&buf[..complete]);
    Ok(LogTail {
        lines: text.lines().map(|line| line.to_string()).collect(),
        offset: offset + complete as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn tail_returns_whole_trailing_lines() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        fs::write(&path, "one\ntwo\nthree\n").expect("write");

        let tail = read_tail(&path, 9).expect("tail");
        // 9 bytes from the end lands inside "two"; the partial line is dropped.
        assert_eq!(tail.lines, vec!["three".to_string()]);
        assert_eq!(tail.offset, 14);
    }

    #[test]
    fn tail_on_a_line_boundary_keeps_the_first_line() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        fs::write(&path, "one\ntwo\nthree\n").expect("write");

        // 10 bytes from the end of the 14-byte file is exactly the start
        // of "two"; nothing is partial, so nothing is dropped.
        let tail = read_tail(&path, 10).expect("tail");
        assert_eq!(tail.lines, vec!["two".to_string(), "three".to_string()]);
        assert_eq!(tail.offset, 14);
    }

    #[test]
    fn appended_lines_are_picked_up_from_offset() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        fs::write(&path, "one\n").expect("write");

        let tail = read_tail(&path, 4096).expect("tail");
        assert_eq!(tail.lines, vec!["one".to_string()]);

        fs::write(&path, "one\ntwo\npart").expect("append");
        let update = read_appended(&path, tail.offset).expect("appended");
        assert_eq!(update.lines, vec!["two".to_string()]);

        // The partial line is not consumed until it is terminated.
        let again = read_appended(&path, update.offset).expect("appended");
        assert!(again.lines.is_empty());
        assert_eq!(again.offset, update.offset);
    }

    #[test]
    fn unchanged_file_yields_no_lines() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        fs::write(&path, "one\n").expect("write");

        let tail = read_tail(&path, 4096).expect("tail");
        let update = read_appended(&path, tail.offset).expect("appended");
        assert!(update.lines.is_empty());
        assert_eq!(update.offset, tail.offset);
    }
}
