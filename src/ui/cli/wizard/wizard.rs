use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_items<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let text = match k.get_detailed_message() {
                Some(desc) if !desc.is_empty() => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
                _ => label.to_string(),
            };
            (k, text)
        })
        .collect()
}

/// Select menu over a documented strum enum; each entry shows its message
/// followed by its detailed message, dimmed.
pub fn prompt_kind<K, D>(driver: &D, title: &str, help: &str) -> Result<K>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
    D: PromptDriver,
{
    let items = kind_items::<K>();
    let labels: Vec<String> = items.iter().map(|(_, text)| text.clone()).collect();
    let idx = driver.select(title, help, &labels)?;
    match items.get(idx) {
        Some((kind, _)) => Ok(*kind),
        None => bail!("selection {idx} out of range for '{title}'"),
    }
}

/// Select menu over a plain enum, labelled by `Display`.
pub fn prompt_enum<K, D>(driver: &D, title: &str, help: &str) -> Result<K>
where
    K: Copy + Display + IntoEnumIterator,
    D: PromptDriver,
{
    let variants: Vec<K> = K::iter().collect();
    let labels: Vec<String> = variants.iter().map(ToString::to_string).collect();
    let idx = driver.select(title, help, &labels)?;
    variants
        .get(idx)
        .copied()
        .with_context(|| format!("selection {idx} out of range for '{title}'"))
}

/// Like [`prompt_enum`], with a leading `none_label` entry that yields `None`.
pub fn prompt_enum_or_none<K, D>(
    driver: &D,
    title: &str,
    help: &str,
    none_label: &str,
) -> Result<Option<K>>
where
    K: Copy + Display + IntoEnumIterator,
    D: PromptDriver,
{
    let variants: Vec<K> = K::iter().collect();
    let labels: Vec<String> = std::iter::once(none_label.to_string())
        .chain(variants.iter().map(ToString::to_string))
        .collect();
    match driver.select(title, help, &labels)? {
        0 => Ok(None),
        idx => variants
            .get(idx - 1)
            .copied()
            .map(Some)
            .with_context(|| format!("selection {idx} out of range for '{title}'")),
    }
}

/// Asks for a choice kind, then for every `params` field of that kind.
///
/// Field defaults come from the schema first and fall back to
/// [`UIChoice::default_params`].
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let kind: C::Kind = prompt_kind(driver, C::prompt_label(), C::prompt_help())?;

    let key: &'static str = kind.into();
    let specs = specs_for_kind(&C::schema(), key)?;
    let defaults = C::default_params(kind);

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        if let Some(val) = prompt_field(driver, &s, init)? {
            params.insert(s.name.clone(), val);
        }
    }

    C::from_parts(kind, Value::Object(params))
}

fn prompt_field<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");

    let is_optional_numeric = !s.required
        && matches!(s.kind, FieldKind::Integer | FieldKind::Number)
        && matches!(init, None | Some(Value::Null));
    if is_optional_numeric {
        let answer = driver.ask_string(&s.title, &format!("{help}\n(leave blank for none)"), "")?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        let val = match s.kind {
            FieldKind::Integer => Value::from(
                answer
                    .parse::<u64>()
                    .with_context(|| format!("invalid integer for {}", s.title))?,
            ),
            _ => Value::from(
                answer
                    .parse::<f64>()
                    .with_context(|| format!("invalid number for {}", s.title))?,
            ),
        };
        return Ok(Some(val));
    }

    let val = match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            Value::String(driver.ask_string(&s.title, help, &def)?)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
        }
    };
    Ok(Some(val))
}

fn validate_output_path(input: &str, allowed_exts: &[&str]) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if p.is_dir() {
        return Err("Expected a file path, not a directory".into());
    }
    if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(format!("Directory does not exist: {}", parent.display()));
        }
    }
    if !allowed_exts.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
        }
    }
    Ok(())
}

/// Asks for a file to write until the answer has an allowed extension and
/// lives in an existing directory. The file itself may or may not exist.
pub fn prompt_output_path<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    allowed_exts: &[&str],
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_output_path(&answer, allowed_exts) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => eprintln!("✗ {msg}"),
        }
    }
}
