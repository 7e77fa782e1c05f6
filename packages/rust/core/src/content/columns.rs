//! Course-content column templates, one per subject.
//!
//! Each template yields three thematic columns and branches on whether the
//! level is primary-like (Primary, KS3) or exam-track.

use curriculum_shared::{ContentColumn, QualificationKey, SubjectKey};

/// The nine fixed column templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTemplate {
    Mathematics,
    English,
    GeneralScience,
    Physics,
    Chemistry,
    Biology,
    BusinessStudies,
    Economics,
    Psychology,
}

impl ColumnTemplate {
    /// Template for a known subject.
    pub fn for_subject(subject: SubjectKey) -> Self {
        match subject {
            SubjectKey::Mathematics => Self::Mathematics,
            SubjectKey::English => Self::English,
            SubjectKey::Science => Self::GeneralScience,
            SubjectKey::Physics => Self::Physics,
            SubjectKey::Chemistry => Self::Chemistry,
            SubjectKey::Biology => Self::Biology,
            SubjectKey::BusinessStudies => Self::BusinessStudies,
            SubjectKey::Economics => Self::Economics,
            SubjectKey::Psychology => Self::Psychology,
        }
    }

    /// Template for a raw subject slug. Unrecognised slugs get the
    /// general-science template.
    pub fn for_slug(slug: &str) -> Self {
        match slug.parse::<SubjectKey>() {
            Ok(subject) => Self::for_subject(subject),
            Err(_) => Self::GeneralScience,
        }
    }

    /// Build the three columns for `level`.
    pub fn columns(self, level: QualificationKey) -> Vec<ContentColumn> {
        let early = level.is_primary_like();
        match self {
            Self::Mathematics => mathematics(early),
            Self::English => english(early),
            Self::GeneralScience => general_science(early),
            Self::Physics => physics(early),
            Self::Chemistry => chemistry(early),
            Self::Biology => biology(early),
            Self::BusinessStudies => business_studies(early),
            Self::Economics => economics(early),
            Self::Psychology => psychology(early),
        }
    }
}

fn column(title: &str, items: &[&str]) -> ContentColumn {
    ContentColumn {
        title: title.to_string(),
        items: items.iter().map(|item| (*item).to_string()).collect(),
    }
}

fn mathematics(early: bool) -> Vec<ContentColumn> {
    if early {
        vec![
            column(
                "Number",
                &["Place value", "Mental arithmetic", "Fractions & decimals", "Times tables"],
            ),
            column(
                "Shape & Measure",
                &["2D & 3D shapes", "Perimeter & area", "Time & money", "Angles"],
            ),
            column(
                "Problem Solving",
                &["Word problems", "Reasoning", "Patterns & sequences", "Data handling"],
            ),
        ]
    } else {
        vec![
            column(
                "Number & Algebra",
                &["Surds & indices", "Quadratics", "Simultaneous equations", "Functions"],
            ),
            column(
                "Geometry & Measures",
                &["Trigonometry", "Circle theorems", "Vectors", "Transformations"],
            ),
            column(
                "Statistics & Probability",
                &["Probability trees", "Histograms", "Averages & spread", "Sampling"],
            ),
        ]
    }
}

fn english(early: bool) -> Vec<ContentColumn> {
    if early {
        vec![
            column(
                "Reading",
                &["Phonics & fluency", "Comprehension", "Inference", "Vocabulary"],
            ),
            column(
                "Writing",
                &["Sentence structure", "Creative writing", "Handwriting", "Editing"],
            ),
            column(
                "Spelling & Grammar",
                &["Spelling patterns", "Punctuation", "Word classes", "Tenses"],
            ),
        ]
    } else {
        vec![
            column(
                "Language",
                &["Unseen extracts", "Language analysis", "Descriptive writing", "Persuasive writing"],
            ),
            column(
                "Literature",
                &["Shakespeare", "19th-century novel", "Modern drama", "Poetry anthology"],
            ),
            column(
                "Exam Skills",
                &["Essay planning", "Quotation use", "Timed responses", "Mark scheme focus"],
            ),
        ]
    }
}

fn general_science(early: bool) -> Vec<ContentColumn> {
    if early {
        vec![
            column(
                "Living Things",
                &["Plants", "Animals & habitats", "The human body", "Life cycles"],
            ),
            column(
                "Materials",
                &["Properties of materials", "States of matter", "Mixtures", "Changes"],
            ),
            column(
                "Physical Processes",
                &["Forces", "Light & sound", "Electricity", "Earth & space"],
            ),
        ]
    } else {
        vec![
            column("Biology", &["Cells", "Organisation", "Infection & response", "Ecology"]),
            column(
                "Chemistry",
                &["Atomic structure", "Bonding", "Chemical changes", "Rates of reaction"],
            ),
            column("Physics", &["Energy", "Electricity", "Particle model", "Waves"]),
        ]
    }
}

fn physics(early: bool) -> Vec<ContentColumn> {
    if early {
        vec![
            column("Forces", &["Pushes & pulls", "Friction", "Gravity", "Balanced forces"]),
            column("Energy", &["Energy stores", "Heating", "Light", "Sound"]),
            column("Space", &["The solar system", "Day & night", "Seasons", "Magnets"]),
        ]
    } else {
        vec![
            column(
                "Mechanics",
                &["Motion graphs", "Newton's laws", "Momentum", "Work & power"],
            ),
            column(
                "Electricity & Fields",
                &["Circuits", "Magnetism", "Electromagnetism", "Fields"],
            ),
            column(
                "Waves & Particles",
                &["Wave properties", "Radioactivity", "Thermal physics", "Space physics"],
            ),
        ]
    }
}

fn chemistry(early: bool) -> Vec<ContentColumn> {
    if early {
        vec![
            column("Matter", &["Solids, liquids & gases", "Particles", "Mixtures", "Separation"]),
            column("Reactions", &["Chemical change", "Acids & alkalis", "Burning", "Rusting"]),
            column("The Earth", &["Rocks", "The atmosphere", "Recycling", "Materials"]),
        ]
    } else {
        vec![
            column(
                "Physical Chemistry",
                &["Atomic structure", "Bonding", "Energetics", "Rates & equilibrium"],
            ),
            column(
                "Inorganic Chemistry",
                &["Periodic table", "Group trends", "Electrolysis", "Metals"],
            ),
            column(
                "Organic Chemistry",
                &["Hydrocarbons", "Functional groups", "Polymers", "Analysis"],
            ),
        ]
    }
}

fn biology(early: bool) -> Vec<ContentColumn> {
    if early {
        vec![
            column("Cells & Organisms", &["Cells", "Microbes", "Classification", "Adaptation"]),
            column("The Body", &["Nutrition", "Digestion", "Breathing", "Health"]),
            column("Ecosystems", &["Food chains", "Habitats", "Plants", "Reproduction"]),
        ]
    } else {
        vec![
            column(
                "Cell Biology",
                &["Cell structure", "Transport", "Cell division", "Enzymes"],
            ),
            column(
                "Human Biology",
                &["Organ systems", "Homeostasis", "Nervous system", "Disease"],
            ),
            column(
                "Genetics & Ecology",
                &["Inheritance", "Evolution", "Ecosystems", "Biodiversity"],
            ),
        ]
    }
}

fn business_studies(early: bool) -> Vec<ContentColumn> {
    if early {
        vec![
            column("Enterprise", &["What businesses do", "Ideas", "Customers", "Teamwork"]),
            column("Money", &["Costs & prices", "Profit", "Saving", "Budgets"]),
            column("Marketing", &["Products", "Advertising", "Branding", "Competition"]),
        ]
    } else {
        vec![
            column(
                "Business Activity",
                &["Enterprise", "Business objectives", "Stakeholders", "Growth"],
            ),
            column(
                "Marketing & Operations",
                &["Market research", "Marketing mix", "Production", "Quality"],
            ),
            column(
                "Finance & People",
                &["Cash flow", "Break-even", "Recruitment", "Motivation"],
            ),
        ]
    }
}

fn economics(early: bool) -> Vec<ContentColumn> {
    if early {
        vec![
            column("Needs & Wants", &["Scarcity", "Choices", "Opportunity cost", "Trade"]),
            column("Markets", &["Buyers & sellers", "Prices", "Shops", "Jobs"]),
            column("Money", &["Earning", "Spending", "Saving", "Banks"]),
        ]
    } else {
        vec![
            column(
                "Microeconomics",
                &["Demand & supply", "Elasticity", "Market failure", "Market structures"],
            ),
            column(
                "Macroeconomics",
                &["Growth", "Inflation", "Unemployment", "Fiscal & monetary policy"],
            ),
            column(
                "Global Economy",
                &["International trade", "Exchange rates", "Development", "Globalisation"],
            ),
        ]
    }
}

fn psychology(early: bool) -> Vec<ContentColumn> {
    if early {
        vec![
            column("Thinking", &["Memory", "Attention", "Learning", "Problem solving"]),
            column("Feelings", &["Emotions", "Friendships", "Confidence", "Resilience"]),
            column("People", &["Behaviour", "Communication", "Empathy", "Groups"]),
        ]
    } else {
        vec![
            column(
                "Cognitive & Biological",
                &["Memory", "Perception", "The brain", "Sleep"],
            ),
            column(
                "Social & Developmental",
                &["Social influence", "Attachment", "Development", "Criminal psychology"],
            ),
            column(
                "Research Methods",
                &["Experiments", "Sampling", "Ethics", "Data analysis"],
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATES: [ColumnTemplate; 9] = [
        ColumnTemplate::Mathematics,
        ColumnTemplate::English,
        ColumnTemplate::GeneralScience,
        ColumnTemplate::Physics,
        ColumnTemplate::Chemistry,
        ColumnTemplate::Biology,
        ColumnTemplate::BusinessStudies,
        ColumnTemplate::Economics,
        ColumnTemplate::Psychology,
    ];

    #[test]
    fn every_template_has_three_filled_columns() {
        for template in TEMPLATES {
            for level in QualificationKey::ALL {
                let columns = template.columns(level);
                assert_eq!(columns.len(), 3, "{template:?} at {level}");
                for column in &columns {
                    assert!(!column.title.is_empty());
                    assert!(!column.items.is_empty());
                }
            }
        }
    }

    #[test]
    fn primary_like_levels_get_early_lists() {
        let primary = ColumnTemplate::Mathematics.columns(QualificationKey::Primary);
        let ks3 = ColumnTemplate::Mathematics.columns(QualificationKey::Ks3);
        let gcse = ColumnTemplate::Mathematics.columns(QualificationKey::Gcse);
        assert_eq!(primary, ks3);
        assert_ne!(primary, gcse);
        assert_eq!(primary[0].title, "Number");
        assert_eq!(gcse[0].title, "Number & Algebra");
    }

    #[test]
    fn subjects_map_to_their_own_template() {
        assert_eq!(
            ColumnTemplate::for_subject(SubjectKey::Science),
            ColumnTemplate::GeneralScience
        );
        assert_eq!(
            ColumnTemplate::for_subject(SubjectKey::BusinessStudies),
            ColumnTemplate::BusinessStudies
        );
    }

    #[test]
    fn unknown_slug_falls_back_to_general_science() {
        assert_eq!(ColumnTemplate::for_slug("astronomy"), ColumnTemplate::GeneralScience);
        assert_eq!(ColumnTemplate::for_slug("economics"), ColumnTemplate::Economics);
    }
}
