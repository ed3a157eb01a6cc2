use anyhow::{Context, Result, anyhow, bail};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

/// One promptable field of a choice's `params` object.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Field specs of the `params` object of the branch tagged `kind_key`.
///
/// Accepts both a `oneOf`/`anyOf` root and a root that is itself the only
/// branch. Fields of unsupported types are skipped.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let branches: Vec<&Map<String, Value>> = match root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(Value::as_array)
    {
        Some(alts) => alts.iter().filter_map(Value::as_object).collect(),
        None => vec![root_obj],
    };

    for branch in branches {
        let Some(props) = branch.get("properties").and_then(Value::as_object) else {
            continue;
        };
        if !discriminant_matches(props, kind_key) {
            continue;
        }

        let Some(params_obj) = props
            .get("params")
            .and_then(Value::as_object)
            .and_then(|o| resolve_ref_obj(root_obj, o))
        else {
            return Ok(vec![]);
        };
        return params_specs(root_obj, params_obj);
    }

    bail!("no branch found for type={kind_key}");
}

fn params_specs(
    root_obj: &Map<String, Value>,
    params_obj: &Map<String, Value>,
) -> Result<Vec<FieldSpec>> {
    let Some(params_props) = params_obj.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let required: Vec<&str> = params_obj
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::new();
    for (name, field_schema) in params_props {
        let fs_obj = field_schema
            .as_object()
            .and_then(|o| resolve_ref_obj(root_obj, o))
            .ok_or_else(|| anyhow!("cannot read schema of field '{name}'"))?;

        let Some(kind) = detect_field_kind(fs_obj.get("type")) else {
            continue;
        };

        let number = |keys: [&str; 2]| keys.iter().find_map(|k| fs_obj.get(*k)).and_then(Value::as_f64);

        out.push(FieldSpec {
            name: name.clone(),
            title: fs_obj
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string(),
            description: fs_obj
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            required: required.contains(&name.as_str()),
            kind,
            default: fs_obj.get("default").cloned(),
            min: number(["minimum", "exclusiveMinimum"]),
            max: number(["maximum", "exclusiveMaximum"]),
        });
    }
    Ok(out)
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tobj) = props.get("type").and_then(Value::as_object) else {
        return false;
    };
    if tobj.get("const").and_then(Value::as_str) == Some(kind_key) {
        return true;
    }
    matches!(
        tobj.get("enum").and_then(Value::as_array).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Follows a local `$ref` such as `#/$defs/PipelineParams`; objects without a
/// `$ref` are returned as they are.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    let Some(reference) = obj.get("$ref") else {
        return Some(obj);
    };
    let path = reference.as_str()?.strip_prefix("#/")?;
    let mut cur = root_obj;
    for raw_seg in path.split('/') {
        // JSON Pointer unescape (~1 => /, ~0 => ~)
        let seg = raw_seg.replace("~1", "/").replace("~0", "~");
        cur = cur.get(&seg)?.as_object()?;
    }
    Some(cur)
}

fn kind_from_name(name: &str) -> Option<FieldKind> {
    match name {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    match ty? {
        Value::String(s) => kind_from_name(s),
        // unions like ["null","integer"] for Option<T>
        Value::Array(arr) => arr.iter().filter_map(Value::as_str).find_map(kind_from_name),
        _ => None,
    }
}
