//! The shared generation pipeline: walk, dedup, name, emit.

use std::{io::Write, path::Path};

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::{
    ArgMap, GeneratorArgs, ResourceKind, Result,
    builder::CodeBuilder,
    templates,
    walker::{AssetFile, collect_leaves},
};

/// What a generation run produced, besides the text itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of leaf files found below the roots.
    pub leaf_count: usize,
    /// Distinct dedup keys, in emission order.
    pub keys: Vec<String>,
    /// Field names shared by more than one key.
    pub collisions: Vec<Collision>,
    /// Keys that produced no identifier and were left out.
    pub skipped: Vec<String>,
}

/// Several keys that converted to the same field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub identifier: String,
    pub keys: Vec<String>,
}

/// Generated text of one resource class body with its summary.
#[derive(Debug, Clone, Default)]
pub struct RenderedBody {
    pub text: String,
    pub summary: GenerateSummary,
}

/// Generate the fields and loader for `kind` and write them to `sink`.
///
/// The whole unit is rendered in memory first, so a traversal error leaves
/// the sink untouched. Malformed arguments fall back to the kind's defaults.
/// [`ResourceKind::None`] writes nothing.
///
/// # Errors
///
/// Fails when a root cannot be walked or the sink rejects the write.
pub fn generate_class<P, W>(
    kind: ResourceKind,
    resources: &[P],
    args: &ArgMap,
    sink: &mut W,
) -> Result<GenerateSummary>
where
    P: AsRef<Path>,
    W: Write + ?Sized,
{
    let rendered = render_body(kind, resources, args)?;
    sink.write_all(rendered.text.as_bytes())?;
    Ok(rendered.summary)
}

/// Render the fields and loader for `kind` without writing them anywhere.
pub fn render_body<P: AsRef<Path>>(
    kind: ResourceKind,
    resources: &[P],
    args: &ArgMap,
) -> Result<RenderedBody> {
    if kind == ResourceKind::None {
        return Ok(RenderedBody::default());
    }

    let args = GeneratorArgs::resolve(kind, args);
    let leaves = collect_leaves(resources)?;
    let keys = distinct_keys(kind, &leaves);
    debug!(
        kind = %kind,
        leaves = leaves.len(),
        keys = keys.len(),
        "collected resource keys"
    );

    let mut entries = Vec::with_capacity(keys.len());
    let mut skipped = Vec::new();
    for key in keys {
        let identifier = args.field_name(kind.name_source(&key));
        if identifier.is_empty() {
            warn!(key = %key, "resource name yields no identifier, skipping");
            skipped.push(key);
        } else {
            entries.push((key, identifier));
        }
    }

    let text = emit(kind, &entries, &args);
    let collisions = find_collisions(&entries);
    for collision in &collisions {
        warn!(
            identifier = %collision.identifier,
            keys = ?collision.keys,
            "several resources map to the same field"
        );
    }

    Ok(RenderedBody {
        text,
        summary: GenerateSummary {
            leaf_count: leaves.len(),
            keys: entries.into_iter().map(|(key, _)| key).collect(),
            collisions,
            skipped,
        },
    })
}

/// Reduce leaf files to their distinct dedup keys, sorted lexicographically.
pub fn distinct_keys(kind: ResourceKind, leaves: &[AssetFile]) -> Vec<String> {
    let mut keys: IndexSet<String> = leaves.iter().map(|leaf| kind.dedup_key(leaf)).collect();
    keys.sort();
    keys.into_iter().collect()
}

fn emit(kind: ResourceKind, entries: &[(String, String)], args: &GeneratorArgs) -> String {
    let mut out = CodeBuilder::java();

    if let Some(preamble) = kind.preamble(args) {
        out.push_text(&preamble);
        out.push_blank();
    }

    for (key, identifier) in entries {
        out.push_line(&kind.field(key, identifier, args));
    }
    if !entries.is_empty() {
        out.push_blank();
    }

    out.push_block(&templates::load_function_header(args), "}", |body| {
        for (key, identifier) in entries {
            body.push_line(&kind.load_statement(key, identifier, args));
        }
    });

    out.build()
}

fn find_collisions(entries: &[(String, String)]) -> Vec<Collision> {
    let mut by_identifier: IndexMap<&str, Vec<String>> = IndexMap::new();
    for (key, identifier) in entries {
        by_identifier
            .entry(identifier.as_str())
            .or_default()
            .push(key.clone());
    }

    by_identifier
        .into_iter()
        .filter(|(_, keys)| keys.len() > 1)
        .map(|(identifier, keys)| Collision {
            identifier: identifier.to_string(),
            keys,
        })
        .collect()
}
