use std::collections::HashSet;

use anyhow::Context;
use lorevault_domain::{disabled_entries, faq_entries, StatDescriptorTable, ThemeRegistry};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("content-check") => {
            let flags: Vec<String> = args.collect();
            content_check(
                flags.iter().any(|f| f == "--json"),
                flags.iter().any(|f| f == "--strict"),
            )
        }
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!(
            "Usage: cargo xtask <command>\n\nCommands:\n  content-check [--json] [--strict]"
        ),
    }
}

/// Validate the static content. Unauthored descriptions are reported but only
/// fail the check with `--strict`.
fn content_check(json: bool, strict: bool) -> anyhow::Result<()> {
    let mut errors: Vec<String> = Vec::new();

    let descriptors = StatDescriptorTable::builtin();
    if let Err(e) = descriptors.validate() {
        errors.push(e.to_string());
    }
    let coverage = descriptors.coverage();

    let themes = ThemeRegistry::builtin().context("registering builtin themes")?;
    for theme in themes.all() {
        if let Err(e) = theme.validate() {
            errors.push(format!("theme {}: {}", theme.location_id, e));
        }
    }

    errors.extend(check_slugs("gated entry", disabled_entries().iter().copied()));
    errors.extend(check_slugs("faq entry", faq_entries().iter().map(|e| e.id)));

    if json {
        let report = serde_json::json!({
            "coverage": coverage,
            "themes": themes.len(),
            "gatedEntries": disabled_entries().len(),
            "errors": errors,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "stat descriptions: {}/{} authored",
            coverage.authored, coverage.total
        );
        for (sub, grade) in &coverage.gaps {
            println!(
                "  missing: {} ({}) at {}",
                sub.as_str(),
                sub.category(),
                grade
            );
        }
        println!("themes: {} registered", themes.len());
        println!("gated entries: {}", disabled_entries().len());
        for error in &errors {
            println!("error: {error}");
        }
    }

    if !errors.is_empty() {
        anyhow::bail!("content check found {} error(s)", errors.len());
    }
    if strict && !coverage.is_complete() {
        anyhow::bail!("{} stat description(s) unauthored", coverage.gaps.len());
    }
    Ok(())
}

fn check_slugs<'a>(kind: &str, slugs: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();
    for slug in slugs {
        let well_formed = !slug.is_empty()
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !well_formed {
            errors.push(format!("{kind} {slug:?} is not a kebab-case slug"));
        }
        if !seen.insert(slug) {
            errors.push(format!("{kind} {slug:?} is listed twice"));
        }
    }
    errors
}
