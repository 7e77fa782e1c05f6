//! schema.org structured data (JSON-LD) for curriculum pages.

use serde_json::{Value, json};

use curriculum_shared::{ContentEntry, CurriculumError, QualificationKey, Result, SiteConfig, SubjectKey};

use crate::catalog;
use crate::routes::{level_path, page_path};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// `Course` object for an entry.
pub fn course_json_ld(entry: &ContentEntry, site: &SiteConfig) -> Result<Value> {
    let level = catalog::qualification(entry.level);
    let subject = catalog::subject(entry.subject);
    let url = site.absolute(&page_path(&site.route_prefix, entry.level, entry.subject))?;

    Ok(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Course",
        "name": format!("{} {}", level.label, subject.label),
        "description": entry.seo.description,
        "url": url,
        "educationalLevel": level.label,
        "keywords": entry.seo.keywords,
        "provider": {
            "@type": "EducationalOrganization",
            "name": site.site_name,
            "url": site.base()?.to_string(),
        },
    }))
}

/// `BreadcrumbList`: Home → Curriculum → level → subject.
pub fn breadcrumb_json_ld(
    level: QualificationKey,
    subject: SubjectKey,
    site: &SiteConfig,
) -> Result<Value> {
    let prefix = &site.route_prefix;
    let crumbs = [
        ("Home".to_string(), site.absolute("/")?),
        ("Curriculum".to_string(), site.absolute(&format!("/{}", prefix.trim_matches('/')))?),
        (
            catalog::qualification(level).label.to_string(),
            site.absolute(&level_path(prefix, level))?,
        ),
        (
            catalog::subject(subject).label.to_string(),
            site.absolute(&page_path(prefix, level, subject))?,
        ),
    ];

    let items: Vec<Value> = crumbs
        .into_iter()
        .enumerate()
        .map(|(i, (name, item))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": item,
            })
        })
        .collect();

    Ok(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    }))
}

/// `FAQPage` built from the assessment cards.
pub fn faq_json_ld(entry: &ContentEntry) -> Value {
    let questions: Vec<Value> = entry
        .assessment
        .cards
        .iter()
        .map(|card| {
            json!({
                "@type": "Question",
                "name": card.title,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": card.body,
                },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// All structured-data objects for a page.
pub fn page_json_ld(entry: &ContentEntry, site: &SiteConfig) -> Result<Vec<Value>> {
    Ok(vec![
        course_json_ld(entry, site)?,
        breadcrumb_json_ld(entry.level, entry.subject, site)?,
        faq_json_ld(entry),
    ])
}

/// Wrap a JSON-LD value in a script element.
pub fn to_script_tag(value: &Value) -> Result<String> {
    let body = serde_json::to_string(value)
        .map_err(|e| CurriculumError::Serialization(e.to_string()))?;
    // Keep the payload from closing the script element early.
    let body = body.replace("</", "<\\/");
    Ok(format!(r#"<script type="application/ld+json">{body}</script>"#))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::build_content;

    #[test]
    fn course_has_provider_and_url() {
        let site = SiteConfig::default();
        let entry = build_content(QualificationKey::Gcse, SubjectKey::Biology);
        let course = course_json_ld(&entry, &site).unwrap();

        assert_eq!(course["@type"], "Course");
        assert_eq!(course["name"], "GCSE Biology");
        assert_eq!(
            course["url"],
            "https://www.example-tutors.ae/curriculum/gcse/biology"
        );
        assert_eq!(course["provider"]["name"], "Apex Tutoring Institute");
    }

    #[test]
    fn breadcrumbs_are_positioned() {
        let site = SiteConfig::default();
        let crumbs = breadcrumb_json_ld(QualificationKey::ALevel, SubjectKey::Economics, &site).unwrap();
        let items = crumbs["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[2]["name"], "A-Level");
        assert_eq!(
            items[3]["item"],
            "https://www.example-tutors.ae/curriculum/a-level/economics"
        );
    }

    #[test]
    fn faq_mirrors_assessment_cards() {
        let entry = build_content(QualificationKey::Gcse, SubjectKey::Mathematics);
        let faq = faq_json_ld(&entry);
        let questions = faq["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0]["name"], "Non-Calculator");
        assert_eq!(
            questions[0]["acceptedAnswer"]["text"],
            entry.assessment.cards[0].body.as_str()
        );
    }

    #[test]
    fn bad_base_url_propagates() {
        let site = SiteConfig {
            base_url: "nope".into(),
            ..SiteConfig::default()
        };
        let entry = build_content(QualificationKey::Ib, SubjectKey::Physics);
        assert!(page_json_ld(&entry, &site).is_err());
    }

    #[test]
    fn script_tag_escapes_closing_tags() {
        let value = json!({ "text": "</script><b>" });
        let tag = to_script_tag(&value).unwrap();
        assert!(tag.starts_with(r#"<script type="application/ld+json">"#));
        assert_eq!(tag.matches("</script>").count(), 1);
    }
}
