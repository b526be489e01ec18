//! Command implementations. Each writes to the given output so they can be
//! exercised without a terminal.

use crate::error::{ErrorKind, Result};
use exn::{OptionExt, ResultExt};
use phonecmp_catalog::Catalog;
use phonecmp_compare::{ComparisonPath, Product, SPECIFICATIONS, decode, slugify};
use std::io::Write;
use tracing::instrument;

/// Marks a winning cell in the comparison table.
const WINNER_MARK: &str = " *";

pub fn slug(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out, "{}", slugify(title)).or_raise(|| ErrorKind::Io)
}

pub fn encode(out: &mut impl Write, titles: &[String]) -> Result<()> {
    let path = ComparisonPath::from_titles(titles).or_raise(|| ErrorKind::Compare)?;
    writeln!(out, "{path}").or_raise(|| ErrorKind::Io)
}

pub fn decode_path(out: &mut impl Write, path: &str) -> Result<()> {
    for slug in decode(path).or_raise(|| ErrorKind::Compare)? {
        writeln!(out, "{slug}").or_raise(|| ErrorKind::Io)?;
    }
    Ok(())
}

pub fn list(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    let slugs: Vec<String> = catalog.products().iter().map(|p| p.slug().into_inner()).collect();
    let width = slugs.iter().map(String::len).max().unwrap_or(0);
    for (product, slug) in catalog.products().iter().zip(&slugs) {
        let written = match product.starting_price() {
            Some(price) => writeln!(out, "{slug:<width$}  {}  (from {price:.2})", product.title),
            None => writeln!(out, "{slug:<width$}  {}", product.title),
        };
        written.or_raise(|| ErrorKind::Io)?;
    }
    Ok(())
}

#[instrument(skip(out, catalog))]
pub fn show(out: &mut impl Write, catalog: &Catalog, slug: &str, placeholder: &str) -> Result<()> {
    let product = catalog.find(slug).ok_or_raise(|| ErrorKind::UnknownPhone(slug.to_string()))?;
    write_product(out, catalog, product, placeholder).or_raise(|| ErrorKind::Io)
}

fn write_product(out: &mut impl Write, catalog: &Catalog, product: &Product, placeholder: &str) -> std::io::Result<()> {
    writeln!(out, "{}", product.title)?;
    writeln!(out, "  slug: {}", product.slug())?;
    writeln!(out, "  id:   {}", product.id)?;
    if let Some(image) = &product.image {
        writeln!(out, "  image: {image}")?;
    }
    writeln!(out, "Specifications")?;
    let width = SPECIFICATIONS.iter().map(|s| s.label.len()).max().unwrap_or(0);
    for spec in SPECIFICATIONS {
        writeln!(out, "  {:<width$}  {}", spec.label, product.spec(spec.key).unwrap_or(placeholder))?;
    }
    // Anything the CMS has that the comparison table doesn't show.
    for (key, value) in &product.specifications {
        if !SPECIFICATIONS.iter().any(|s| s.key == key) {
            writeln!(out, "  {key:<width$}  {value}")?;
        }
    }
    if !product.variants.is_empty() {
        writeln!(out, "Variants")?;
        for variant in &product.variants {
            writeln!(out, "  {variant}")?;
        }
    }
    if !product.links.is_empty() {
        writeln!(out, "Buy")?;
        for link in &product.links {
            writeln!(out, "  {link}")?;
        }
    }
    let related = catalog.related(product);
    if !related.is_empty() {
        writeln!(out, "Related")?;
        for phone in related {
            writeln!(out, "  {} ({})", phone.title, phone.slug())?;
        }
    }
    let mut tags = catalog.edit_tags(&product.id).peekable();
    if tags.peek().is_some() {
        writeln!(out, "Edit tags")?;
        for (field, location) in tags {
            writeln!(out, "  {field}: {location}")?;
        }
    }
    Ok(())
}

/// Prints the comparison table, marking each winning cell with `*`.
#[instrument(skip(out, catalog))]
pub fn compare(out: &mut impl Write, catalog: &Catalog, path: &str, placeholder: &str) -> Result<()> {
    let set = catalog.compare(path).or_raise(|| ErrorKind::Compare)?;
    let table = set.table().or_raise(|| ErrorKind::Compare)?;

    let mut header = vec![String::new()];
    header.extend(table.products.iter().map(|p| p.title.clone()));
    let mut lines = vec![header];
    for row in &table.rows {
        let mut line = vec![row.specification.label.to_string()];
        line.extend(row.cells.iter().map(|ranked| {
            let text = ranked.cell.display_or(placeholder);
            match ranked.winner {
                true => format!("{text}{WINNER_MARK}"),
                false => text.to_string(),
            }
        }));
        lines.push(line);
    }
    let mut footer = vec!["Wins".to_string()];
    footer.extend(table.wins().iter().map(usize::to_string));
    lines.push(footer);

    let columns = lines[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| lines.iter().map(|line| line[c].chars().count()).max().unwrap_or(0))
        .collect();
    for line in &lines {
        let cells: Vec<String> = line.iter().zip(&widths).map(|(cell, &width)| format!("{cell:<width$}")).collect();
        writeln!(out, "{}", cells.join(" | ").trim_end()).or_raise(|| ErrorKind::Io)?;
    }
    Ok(())
}
