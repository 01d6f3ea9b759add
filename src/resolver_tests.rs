    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("fixture should be writable");
        path
    }

    fn resolve_str(path: &Path) -> String {
        let bytes = resolve(path, &Converter::new()).expect("resolve should succeed");
        String::from_utf8(bytes).expect("output should be utf-8")
    }

    #[test]
    fn test_resolver_classifies_by_extension() {
        assert_eq!(ContentKind::of(Path::new("a.html")), ContentKind::Rendered);
        assert_eq!(ContentKind::of(Path::new("a.htm")), ContentKind::Rendered);
        assert_eq!(ContentKind::of(Path::new("A.HTML")), ContentKind::Rendered);
        assert_eq!(ContentKind::of(Path::new("a.md")), ContentKind::Markdown);
        assert_eq!(ContentKind::of(Path::new("notes")), ContentKind::Markdown);
        assert_eq!(ContentKind::of(Path::new("notes.txt")), ContentKind::Markdown);
        assert_eq!(ContentKind::of(Path::new("dir.html/notes")), ContentKind::Markdown);
    }

    #[test]
    fn test_resolver_converts_markdown_file() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "test.md", b"## Hello\n\nWorld");
        assert_eq!(resolve_str(&path), "<h2>Hello</h2>\n<p>World</p>");
    }

    #[test]
    fn test_resolver_passes_html_through() {
        let dir = TempDir::new().unwrap();
        let html = write_fixture(&dir, "test.html", b"<h2>Already HTML</h2>");
        let htm = write_fixture(&dir, "test.htm", b"<p>Also HTML</p>");
        assert_eq!(resolve_str(&html), "<h2>Already HTML</h2>");
        assert_eq!(resolve_str(&htm), "<p>Also HTML</p>");
    }

    #[test]
    fn test_resolver_html_passthrough_ignores_content() {
        let dir = TempDir::new().unwrap();
        // Markdown syntax and invalid utf-8 inside an .html file stay as they are.
        let raw: &[u8] = b"## not converted\n**kept**\xff\xfe\n";
        let path = write_fixture(&dir, "raw.html", raw);
        assert_eq!(resolve(&path, &Converter::new()).unwrap(), raw);
    }

    #[test]
    fn test_resolver_no_extension_is_markdown() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "notes", b"**Bold** text");
        assert_eq!(resolve_str(&path), "<p><strong>Bold</strong> text</p>");
    }

    #[test]
    fn test_resolver_unknown_extension_is_markdown() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "notes.txt", b"## Heading");
        assert_eq!(resolve_str(&path), "<h2>Heading</h2>");
    }

    #[test]
    fn test_resolver_missing_file_reports_path_and_cause() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.md");
        let err = resolve(&path, &Converter::new()).unwrap_err();
        match err {
            Error::FileRead { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected FileRead, got {other:?}"),
        }
    }
