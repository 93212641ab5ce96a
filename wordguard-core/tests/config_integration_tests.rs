// wordguard-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use wordguard_core::{Filter, FilterError, FilterOptions, SubstitutionTable};

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_config(
        r#"
word_boundaries: true
parse_obfuscated: false
replace_with: "[BEEP]"
disable_default_list: true
include_words: [xyz, badword]
"#,
    )?;
    let options = FilterOptions::load_from_file(file.path())?;
    assert!(options.word_boundaries);
    assert!(!options.parse_obfuscated);
    assert_eq!(options.replace_with, "[BEEP]");
    assert_eq!(options.include_words.len(), 2);

    let filter = Filter::new(options)?;
    assert_eq!(filter.sanitize("xyz and badword", None, None), "[BEEP] and [BEEP]");
    Ok(())
}

#[test]
fn test_omitted_fields_use_defaults() -> Result<()> {
    let file = write_config("replace_with: \"*\"\n")?;
    let options = FilterOptions::load_from_file(file.path())?;
    assert_eq!(
        options,
        FilterOptions { replace_with: "*".to_string(), ..Default::default() }
    );
    Ok(())
}

#[test]
fn test_custom_substitutions() -> Result<()> {
    let file = write_config(
        r#"
disable_default_list: true
include_words: [evil]
substitutions:
  "3": e
  "1": i
"#,
    )?;
    let options = FilterOptions::load_from_file(file.path())?;
    assert_eq!(options.substitutions, [('3', 'e'), ('1', 'i')].into_iter().collect::<SubstitutionTable>());

    let filter = Filter::new(options)?;
    assert!(filter.detect("3v1l", None));
    Ok(())
}

#[test]
fn test_extended_table_through_options() -> Result<()> {
    let mut filter = Filter::new(FilterOptions {
        disable_default_list: true,
        substitutions: SubstitutionTable::extended(),
        ..Default::default()
    })?;
    filter.insert_word("evil");
    assert!(filter.detect("3vil", None));

    let mut default_table = Filter::new(FilterOptions {
        disable_default_list: true,
        ..Default::default()
    })?;
    default_table.insert_word("evil");
    assert!(!default_table.detect("3vil", None));
    Ok(())
}

#[test]
fn test_max_repeat_from_file() -> Result<()> {
    let file = write_config("disable_default_list: true\ninclude_words: [good]\nmax_repeat: 2\n")?;
    let filter = Filter::new(FilterOptions::load_from_file(file.path())?)?;
    assert!(filter.detect("gooood", None));
    assert!(!filter.detect("god", None));
    Ok(())
}

#[test]
fn test_zero_max_repeat_is_rejected() -> Result<()> {
    let file = write_config("max_repeat: 0\n")?;
    let err = FilterOptions::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, FilterError::InvalidMaxRepeat(0)));
    Ok(())
}

#[test]
fn test_invalid_yaml_is_a_parse_error() -> Result<()> {
    let file = write_config("word_boundaries: [not, a, bool]\n")?;
    let err = FilterOptions::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, FilterError::ConfigParse(_)));
    Ok(())
}

#[test]
fn test_missing_file_is_a_read_error() {
    let err = FilterOptions::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, FilterError::ConfigRead { .. }));
}
