//! Assembling source files into a listing document.
//!
//! The assembler owns the sink for the whole run. It writes the header once,
//! then walks the files in the order given and appends every line that is
//! neither blank nor a comment. Source order is preserved: files in the
//! order passed in, lines in file order.

use std::path::Path;

use super::sink::DocumentSink;
use crate::data::{
    classify, read_source, split_lines, CommentMarkerSet, FileListing, LineCounts, LineKind,
};
use crate::options::StyleProfile;
use crate::Result;

/// Writes filtered source lines into a [`DocumentSink`].
pub struct DocumentAssembler<S: DocumentSink> {
    sink: S,
    style: StyleProfile,
    markers: CommentMarkerSet,
    files: Vec<FileListing>,
    lines: LineCounts,
}

/// What the assembler produced: the filled sink plus per-file statistics.
#[derive(Debug)]
pub struct Assembled<S> {
    pub sink: S,
    pub files: Vec<FileListing>,
    pub lines: LineCounts,
}

impl<S: DocumentSink> DocumentAssembler<S> {
    pub fn new(sink: S, style: StyleProfile, markers: CommentMarkerSet) -> Self {
        Self {
            sink,
            style,
            markers,
            files: Vec::new(),
            lines: LineCounts::new(),
        }
    }

    /// Put `title` in the page header.
    pub fn write_header(&mut self, title: &str) -> Result<&mut Self> {
        self.sink.set_header(title, &self.style)?;
        Ok(self)
    }

    /// Read one file and append its kept lines.
    ///
    /// Missing or unreadable files are errors. Bytes that do not decode are
    /// replaced and the file is still written.
    pub fn write_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        let decoded = read_source(path)?;
        let lines = self.write_text(&decoded.text)?;

        tracing::debug!(
            "{}: {} lines, {} kept",
            path.display(),
            lines.total,
            lines.kept
        );

        self.files.push(FileListing {
            path: path.to_path_buf(),
            encoding: decoded.encoding,
            lossy: decoded.lossy,
            lines,
        });
        Ok(self)
    }

    /// Append the kept lines of already-decoded text.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Terminators are removed;
    /// everything else on the line, indentation included, is written as is.
    pub fn write_text(&mut self, text: &str) -> Result<LineCounts> {
        let mut counts = LineCounts::new();

        for line in split_lines(text) {
            let kind = classify(line, &self.markers);
            counts.record(kind);
            if kind == LineKind::Code {
                self.sink.append_line(line, &self.style)?;
            }
        }

        self.lines += counts;
        Ok(counts)
    }

    /// Hand back the sink and the statistics gathered so far.
    pub fn finish(self) -> Assembled<S> {
        Assembled {
            sink: self.sink,
            files: self.files,
            lines: self.lines,
        }
    }
}

/// Write a header and every file in `files` into `sink`.
pub fn assemble<S, P>(
    sink: S,
    title: &str,
    files: &[P],
    style: &StyleProfile,
    markers: &CommentMarkerSet,
) -> Result<Assembled<S>>
where
    S: DocumentSink,
    P: AsRef<Path>,
{
    let mut assembler = DocumentAssembler::new(sink, style.clone(), markers.clone());
    assembler.write_header(title)?;
    for file in files {
        assembler.write_file(file)?;
    }
    Ok(assembler.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwcrError;
    use crate::output::memory::{Alignment, RenderedDocument};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write(path: &Path, content: &[u8]) -> PathBuf {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        path.to_path_buf()
    }

    fn slash_markers() -> CommentMarkerSet {
        CommentMarkerSet::new(["//"])
    }

    #[test]
    fn test_single_file_scenario() {
        let temp = tempdir().unwrap();
        let file = write(&temp.path().join("a.c"), b"// hi\n\nint x;\n");

        let assembled = assemble(
            RenderedDocument::new(),
            "Title",
            &[file],
            &StyleProfile::default(),
            &slash_markers(),
        )
        .unwrap();

        let doc = assembled.sink;
        assert_eq!(doc.header().unwrap().text, "Title");
        assert_eq!(doc.header().unwrap().alignment, Alignment::Center);
        assert_eq!(doc.lines().collect::<Vec<_>>(), vec!["int x;"]);
        assert_eq!(doc.paragraph_count(), 2);
    }

    #[test]
    fn test_count_property() {
        let temp = tempdir().unwrap();
        // 6 lines: 2 blank, 2 comment, 2 code
        let a = write(
            &temp.path().join("a.c"),
            b"/* head */\nint a;\n\n   \n * body\nreturn a;\n",
        );
        // 4 lines: 1 blank, 1 comment, 2 code
        let b = write(&temp.path().join("b.c"), b"int b;\r\n\r\n// x\r\n}\r\n");

        let assembled = assemble(
            RenderedDocument::new(),
            "T",
            &[a, b],
            &StyleProfile::default(),
            &CommentMarkerSet::default(),
        )
        .unwrap();

        let (k, blank, comment) = (10, 3, 3);
        assert_eq!(assembled.lines.total, k);
        assert_eq!(assembled.lines.blank, blank);
        assert_eq!(assembled.lines.comment, comment);
        assert_eq!(assembled.lines.kept, k - blank - comment);
        assert_eq!(assembled.sink.paragraphs().len() as u64, k - blank - comment);
        assert_eq!(assembled.sink.paragraph_count() as u64, k - blank - comment + 1);
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let temp = tempdir().unwrap();
        let file = write(&temp.path().join("mac.c"), b"// header\rint x;\rint y;\r");

        let assembled = assemble(
            RenderedDocument::new(),
            "T",
            &[file],
            &StyleProfile::default(),
            &slash_markers(),
        )
        .unwrap();

        assert_eq!(assembled.lines.total, 3);
        assert_eq!(assembled.lines.comment, 1);
        assert_eq!(assembled.lines.kept, 2);
        assert_eq!(
            assembled.sink.lines().collect::<Vec<_>>(),
            vec!["int x;", "int y;"]
        );
    }

    #[test]
    fn test_preserves_file_and_line_order() {
        let temp = tempdir().unwrap();
        let first = write(&temp.path().join("z.c"), b"z1\nz2\n");
        let second = write(&temp.path().join("a.c"), b"a1\na2\n");

        let assembled = assemble(
            RenderedDocument::new(),
            "T",
            &[first, second],
            &StyleProfile::default(),
            &slash_markers(),
        )
        .unwrap();

        assert_eq!(
            assembled.sink.lines().collect::<Vec<_>>(),
            vec!["z1", "z2", "a1", "a2"]
        );
        assert!(assembled.files[0].path.ends_with("z.c"));
        assert!(assembled.files[1].path.ends_with("a.c"));
    }

    #[test]
    fn test_keeps_indentation_and_trailing_text() {
        let temp = tempdir().unwrap();
        let file = write(
            &temp.path().join("a.c"),
            b"\tif (x) {\n        y(); // call\n\t}\n",
        );

        let assembled = assemble(
            RenderedDocument::new(),
            "T",
            &[file],
            &StyleProfile::default(),
            &slash_markers(),
        )
        .unwrap();

        assert_eq!(
            assembled.sink.lines().collect::<Vec<_>>(),
            vec!["\tif (x) {", "        y(); // call", "\t}"]
        );
    }

    #[test]
    fn test_style_applied_to_every_paragraph() {
        let temp = tempdir().unwrap();
        let file = write(&temp.path().join("a.c"), b"a\nb\n");
        let style = StyleProfile::new().font_name("Consolas").font_size(9.0);

        let assembled = assemble(
            RenderedDocument::new(),
            "T",
            &[file],
            &style,
            &slash_markers(),
        )
        .unwrap();

        assert_eq!(assembled.sink.header().unwrap().style, style);
        for paragraph in assembled.sink.paragraphs() {
            assert_eq!(paragraph.style, style);
        }
    }

    #[test]
    fn test_mixed_encodings_across_files() {
        let temp = tempdir().unwrap();
        let utf8 = write(&temp.path().join("u.c"), "char *s = \"你好\";\n".as_bytes());
        let mut utf16 = vec![0xFF, 0xFE];
        for unit in "int w;\n".encode_utf16() {
            utf16.extend_from_slice(&unit.to_le_bytes());
        }
        let wide = write(&temp.path().join("w.c"), &utf16);

        let assembled = assemble(
            RenderedDocument::new(),
            "T",
            &[utf8, wide],
            &StyleProfile::default(),
            &slash_markers(),
        )
        .unwrap();

        assert_eq!(
            assembled.sink.lines().collect::<Vec<_>>(),
            vec!["char *s = \"你好\";", "int w;"]
        );
        assert_eq!(assembled.files[0].encoding, "UTF-8");
        assert_eq!(assembled.files[1].encoding, "UTF-16LE");
    }

    #[test]
    fn test_malformed_bytes_do_not_abort() {
        let temp = tempdir().unwrap();
        let bad = write(&temp.path().join("bad.c"), b"\xEF\xBB\xBFint \xFF;\n");
        let good = write(&temp.path().join("good.c"), b"int ok;\n");

        let assembled = assemble(
            RenderedDocument::new(),
            "T",
            &[bad, good],
            &StyleProfile::default(),
            &slash_markers(),
        )
        .unwrap();

        assert!(assembled.files[0].lossy);
        assert!(!assembled.files[1].lossy);
        assert_eq!(
            assembled.sink.lines().collect::<Vec<_>>(),
            vec!["int \u{FFFD};", "int ok;"]
        );
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let temp = tempdir().unwrap();
        let good = write(&temp.path().join("good.c"), b"int ok;\n");
        let missing = temp.path().join("gone.c");

        let result = assemble(
            RenderedDocument::new(),
            "T",
            &[good, missing],
            &StyleProfile::default(),
            &slash_markers(),
        );

        assert!(matches!(result, Err(SwcrError::FileRead { .. })));
    }

    #[test]
    fn test_empty_file_list_writes_header_only() {
        let files: [PathBuf; 0] = [];
        let assembled = assemble(
            RenderedDocument::new(),
            "Only a header",
            &files,
            &StyleProfile::default(),
            &slash_markers(),
        )
        .unwrap();

        assert_eq!(assembled.sink.paragraph_count(), 1);
        assert_eq!(assembled.lines, LineCounts::new());
    }

    #[test]
    fn test_idempotent() {
        let temp = tempdir().unwrap();
        let a = write(&temp.path().join("a.c"), b"// c\nint a;\n\nint b;\n");
        let files = [a];

        let run = || {
            assemble(
                RenderedDocument::new(),
                "T",
                &files,
                &StyleProfile::default(),
                &slash_markers(),
            )
            .unwrap()
            .sink
        };

        assert_eq!(run(), run());
    }
}
