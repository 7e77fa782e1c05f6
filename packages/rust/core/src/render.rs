//! Markdown preview of a curriculum page.
//!
//! Produces a YAML-frontmatter Markdown document with one section per
//! content block. Optional blocks (overview cards, assessment note, related
//! courses) are skipped when absent.

use curriculum_shared::ContentEntry;

use crate::related::RelatedTile;

/// Render an entry as Markdown.
pub fn render_markdown(entry: &ContentEntry, related: &[RelatedTile], path: &str) -> String {
    let mut md = build_frontmatter(&entry.seo.title, &entry.seo.description, path);

    // Hero
    md.push_str(&format!("\n# {}\n\n{}\n\n", entry.hero.title, entry.hero.subtitle));
    for badge in &entry.hero.key_badges {
        md.push_str(&format!("- **{}** — {}\n", badge.title, badge.subtitle));
    }

    // Overview
    md.push_str(&format!("\n## {}\n\n{}\n", entry.overview.heading, entry.overview.body));
    if let Some(cards) = &entry.overview.cards {
        md.push('\n');
        for card in cards {
            md.push_str(&format!("- **{}**: {}\n", card.title, card.body));
        }
    }

    // Course content
    md.push_str(&format!("\n## {}\n", entry.course_content.heading));
    for column in &entry.course_content.columns {
        md.push_str(&format!("\n### {}\n\n", column.title));
        for item in &column.items {
            md.push_str(&format!("- {item}\n"));
        }
    }

    // Assessment
    md.push_str(&format!("\n## {}\n\n", entry.assessment.heading));
    for card in &entry.assessment.cards {
        md.push_str(&format!(
            "- **{} · {}**: {}\n",
            card.eyebrow, card.title, card.body
        ));
    }
    if let (Some(heading), Some(body)) = (&entry.assessment.note_heading, &entry.assessment.note_body)
    {
        md.push_str(&format!("\n> **{heading}** {body}\n"));
    }

    // Exam boards
    md.push_str(&format!("\n## {}\n\n", entry.exam_boards.heading));
    for board in &entry.exam_boards.cards {
        match &board.specification {
            Some(spec) => md.push_str(&format!(
                "- **{}** ({spec}): {}\n",
                board.name, board.description
            )),
            None => md.push_str(&format!("- **{}**: {}\n", board.name, board.description)),
        }
    }

    // Differentiators
    md.push_str(&format!("\n## {}\n\n", entry.differentiators.heading));
    for item in &entry.differentiators.items {
        md.push_str(&format!("- **{}**: {}\n", item.title, item.body));
    }

    // Testimonials
    md.push_str(&format!("\n## {}\n", entry.success.heading));
    for t in &entry.success.testimonials {
        md.push_str(&format!("\n> {}\n>\n> — {}, {}\n", t.quote, t.author, t.role));
    }

    if !related.is_empty() {
        md.push_str("\n## Related Courses\n\n");
        for tile in related {
            md.push_str(&format!("- [{}]({})\n", tile.label, tile.href));
        }
    }

    md
}

fn build_frontmatter(title: &str, description: &str, path: &str) -> String {
    let mut fm = String::from("---\n");
    fm.push_str(&format!("title: \"{}\"\n", escape_yaml_string(title)));
    fm.push_str(&format!("description: \"{}\"\n", escape_yaml_string(description)));
    fm.push_str(&format!("path: \"{}\"\n", escape_yaml_string(path)));
    fm.push_str("---\n");
    fm
}

/// Escape special characters in a YAML string value.
fn escape_yaml_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
