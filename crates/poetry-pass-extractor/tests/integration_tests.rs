//! Integration tests for poetry-pass-extractor
//!
//! These tests run both extractors against file-backed corpora and check the
//! invariants of the artifacts they produce.

use poetry_pass_extractor::{
    audit_artifact, contains_rare_chars, extract_hsk_words, extract_poetry_lines, read_artifact,
    ArtifactKind, ExtractorConfig, ExtractorError,
};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const POEMS: &str = r#"[
    {"title": "静夜思", "author": "李白",
     "paragraphs": ["床前明月光，疑是地上霜。", "举头望明月，低头思故乡。"]},
    {"title": "水调歌头", "author": "苏轼",
     "paragraphs": ["明月几时有？把酒问青天。", "不知天上宫阙，今夕是何年。"]},
    {"title": "水调歌头（又）",
     "paragraphs": ["明月几时有！", "我欲乘风归去，又恐琼楼玉宇，高处不胜寒。"]},
    {"title": "春晓",
     "paragraphs": ["春眠不觉晓，处处闻啼鸟。", "夜来风雨声，花落知多少。"]},
    {"title": "杂句",
     "paragraphs": ["三个字；ABCDE；一二三四五六七八；《春》夏秋冬天", "  白日依山尽  ，黄河入海流"]},
    {"title": "残篇"}
]"#;

const WORDS: &str = r#"[
    {"simplified": "学习", "traditional": "學習", "level": ["new-2-up", "old-1"]},
    {"simplified": "你", "level": ["new-1"]},
    {"simplified": "联合国", "level": ["new-5"]},
    {"simplified": "朋友", "level": ["old-3", "new-1"]},
    {"simplified": "朋友", "level": ["new-2"]},
    {"simplified": "图书馆", "level": ["new-3-up"]},
    {"simplified": "中华人民共和国", "level": ["new-3"]},
    {"simplified": "电脑"},
    {"level": ["new-1"]},
    {"simplified": "经济", "level": ["new-4"]}
]"#;

fn corpus(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

fn line_set(path: &PathBuf) -> HashSet<String> {
    read_artifact(path).unwrap().into_iter().collect()
}

#[test]
fn test_poetry_lines_satisfy_invariants() {
    let dir = TempDir::new().unwrap();
    let input = corpus(&dir, "poems.json", POEMS);
    let output = dir.path().join("poetry.txt");

    extract_poetry_lines(&input, &output).unwrap();

    let lines = read_artifact(&output).unwrap();
    assert!(!lines.is_empty());
    for line in &lines {
        let len = line.chars().count();
        assert!((5..=7).contains(&len), "bad length: {}", line);
        assert!(!contains_rare_chars(line), "rare chars: {}", line);
        assert!(line.chars().all(|c| ('\u{4E00}'..='\u{9FFF}').contains(&c)));
    }

    let audit = audit_artifact(&output, ArtifactKind::Poetry, &ExtractorConfig::default()).unwrap();
    assert!(audit.is_clean());
}

#[test]
fn test_poetry_expected_lines() {
    let dir = TempDir::new().unwrap();
    let input = corpus(&dir, "poems.json", POEMS);
    let output = dir.path().join("poetry.txt");

    extract_poetry_lines(&input, &output).unwrap();
    let lines = line_set(&output);

    for expected in [
        "床前明月光", "疑是地上霜", "举头望明月", "低头思故乡",
        "明月几时有", "把酒问青天", "不知天上宫阙", "今夕是何年",
        "我欲乘风归去", "又恐琼楼玉宇", "高处不胜寒",
        "春眠不觉晓", "处处闻啼鸟", "夜来风雨声", "花落知多少",
        "白日依山尽", "黄河入海流",
    ] {
        assert!(lines.contains(expected), "missing {}", expected);
    }

    // 3 chars, Latin, 8 chars, book-title marks
    for rejected in ["三个字", "ABCDE", "一二三四五六七八", "《春》夏秋冬天"] {
        assert!(!lines.contains(rejected), "unexpected {}", rejected);
    }

    assert_eq!(lines.len(), 17);
}

#[test]
fn test_shared_fragment_written_once() {
    let dir = TempDir::new().unwrap();
    let input = corpus(&dir, "poems.json", POEMS);
    let output = dir.path().join("poetry.txt");

    let report = extract_poetry_lines(&input, &output).unwrap();
    let lines = read_artifact(&output).unwrap();

    let count = lines.iter().filter(|l| l.as_str() == "明月几时有").count();
    assert_eq!(count, 1);
    assert!(report.candidates_kept > report.lines_written);
}

#[test]
fn test_vocabulary_words_satisfy_invariants() {
    let dir = TempDir::new().unwrap();
    let input = corpus(&dir, "hsk.json", WORDS);
    let output = dir.path().join("words.txt");

    let report = extract_hsk_words(&input, &output, 3).unwrap();
    let words = line_set(&output);

    let expected: HashSet<String> = ["学习", "朋友", "图书馆"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(words, expected);
    assert_eq!(report.lines_written, 3);
    assert_eq!(report.candidates_kept, 4);

    let audit =
        audit_artifact(&output, ArtifactKind::Vocabulary, &ExtractorConfig::default()).unwrap();
    assert!(audit.is_clean());
}

#[test]
fn test_higher_ceiling_admits_more_words() {
    let dir = TempDir::new().unwrap();
    let input = corpus(&dir, "hsk.json", WORDS);
    let output = dir.path().join("words.txt");

    extract_hsk_words(&input, &output, 5).unwrap();
    let words = line_set(&output);

    assert!(words.contains("联合国"));
    assert!(words.contains("经济"));
    assert!(!words.contains("你"));
    assert!(!words.contains("电脑"));
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = corpus(&dir, "poems.json", POEMS);
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    extract_poetry_lines(&input, &first).unwrap();
    extract_poetry_lines(&input, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_output_has_trailing_newline_per_line() {
    let dir = TempDir::new().unwrap();
    let input = corpus(&dir, "hsk.json", WORDS);
    let output = dir.path().join("words.txt");

    extract_hsk_words(&input, &output, 3).unwrap();
    let raw = fs::read_to_string(&output).unwrap();

    assert!(raw.ends_with('\n'));
    assert_eq!(raw.matches('\n').count(), 3);
    assert!(!raw.contains("\n\n"));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let result = extract_poetry_lines(dir.path().join("nope.json"), dir.path().join("out.txt"));
    assert!(matches!(result, Err(ExtractorError::Io { .. })));
}

#[test]
fn test_paragraphs_of_wrong_type_fail() {
    let dir = TempDir::new().unwrap();
    let input = corpus(&dir, "poems.json", r#"[{"paragraphs": [["床前明月光"]]}]"#);
    let output = dir.path().join("poetry.txt");

    let result = extract_poetry_lines(&input, &output);
    assert!(matches!(result, Err(ExtractorError::InvalidRecord { index: 0, .. })));
    assert!(!output.exists());
}

#[test]
fn test_top_level_object_fails() {
    let dir = TempDir::new().unwrap();
    let input = corpus(&dir, "hsk.json", r#"{"words": []}"#);

    let result = extract_hsk_words(&input, dir.path().join("words.txt"), 3);
    assert!(matches!(result, Err(ExtractorError::InvalidDocument(_))));
}

#[test]
fn test_null_paragraphs_fail() {
    let dir = TempDir::new().unwrap();
    let input = corpus(
        &dir,
        "poems.json",
        r#"[{"paragraphs": null}, {"paragraphs": ["床前明月光，疑是地上霜。"]}]"#,
    );
    let output = dir.path().join("poetry.txt");

    let result = extract_poetry_lines(&input, &output);
    assert!(matches!(result, Err(ExtractorError::InvalidRecord { index: 0, .. })));
    assert!(!output.exists());
}

#[test]
fn test_null_simplified_with_accepted_level_fails() {
    let dir = TempDir::new().unwrap();
    let input = corpus(
        &dir,
        "hsk.json",
        r#"[{"simplified": "学习", "level": ["new-2"]}, {"simplified": null, "level": ["new-1"]}]"#,
    );
    let output = dir.path().join("words.txt");

    let result = extract_hsk_words(&input, &output, 3);
    assert!(matches!(result, Err(ExtractorError::InvalidRecord { index: 1, .. })));
    assert!(!output.exists());
}

#[test]
fn test_null_simplified_above_ceiling_is_ignored() {
    let dir = TempDir::new().unwrap();
    let input = corpus(
        &dir,
        "hsk.json",
        r#"[{"simplified": null, "level": ["new-6"]}, {"simplified": "学习", "level": ["new-2"]}]"#,
    );
    let output = dir.path().join("words.txt");

    let report = extract_hsk_words(&input, &output, 3).unwrap();
    assert_eq!(report.records_read, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "学习\n");
}

#[test]
fn test_null_level_fails() {
    let dir = TempDir::new().unwrap();
    let input = corpus(&dir, "hsk.json", r#"[{"simplified": "学习", "level": null}]"#);
    let output = dir.path().join("words.txt");

    let result = extract_hsk_words(&input, &output, 3);
    assert!(matches!(result, Err(ExtractorError::InvalidRecord { index: 0, .. })));
    assert!(!output.exists());
}

#[test]
fn test_non_object_word_entry_fails() {
    let dir = TempDir::new().unwrap();
    let input = corpus(
        &dir,
        "hsk.json",
        r#"["学习", {"simplified": "朋友", "level": ["new-1"]}]"#,
    );
    let output = dir.path().join("words.txt");

    let result = extract_hsk_words(&input, &output, 3);
    assert!(matches!(result, Err(ExtractorError::InvalidRecord { index: 0, .. })));
    assert!(!output.exists());
}
