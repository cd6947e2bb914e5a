//! Built-in reference data: a question catalog that exactly fills one
//! assessment, the engineering branch and programme listings, and a starter
//! career catalog. Loaded once through `CatalogService::seed_reference_data`.

use std::collections::HashMap;

use crate::models::domain::{
    BranchSpec, CareerSpec, CategoryCode, OptionSpec, ProgrammeSpec, QuestionSpec,
};

fn likert_options() -> Vec<OptionSpec> {
    [
        "Strongly Disagree",
        "Disagree",
        "Neutral",
        "Agree",
        "Strongly Agree",
    ]
    .iter()
    .enumerate()
    .map(|(i, text)| OptionSpec {
        text: text.to_string(),
        weight: i as i32 + 1,
        display_order: i as i32 + 1,
    })
    .collect()
}

fn question(order: i32, category: CategoryCode, text: &str) -> QuestionSpec {
    QuestionSpec {
        text: text.to_string(),
        section: category.section(),
        category,
        is_active: true,
        display_order: order,
        options: likert_options(),
    }
}

/// One question per selection slot: four per interest code, and the aptitude
/// and personality quotas on top.
pub fn question_specs() -> Vec<QuestionSpec> {
    use CategoryCode::*;

    let statements: [(CategoryCode, &str); 40] = [
        (R, "I enjoy repairing machines, vehicles or household appliances."),
        (R, "I would rather build something with my hands than write about it."),
        (R, "Working outdoors with tools and equipment appeals to me."),
        (R, "I like figuring out how mechanical things fit together."),
        (I, "I enjoy carrying out experiments to test my own ideas."),
        (I, "I like reading about scientific discoveries and new research."),
        (I, "Solving abstract problems is more fun for me than routine work."),
        (I, "I often ask why things work the way they do."),
        (A, "I enjoy drawing, painting, music or other creative work."),
        (A, "I prefer open-ended tasks where I can express my own style."),
        (A, "I notice design, colour and composition in everyday things."),
        (A, "I like writing stories, scripts or poetry."),
        (S, "Helping someone work through a personal problem feels rewarding."),
        (S, "I enjoy teaching or explaining things to other people."),
        (S, "Friends often come to me for advice."),
        (S, "I would enjoy volunteering for a community cause."),
        (E, "I like persuading people to see things my way."),
        (E, "Leading a project excites me more than executing someone else's plan."),
        (E, "I enjoy selling ideas, products or services."),
        (E, "I am comfortable taking calculated risks for a bigger reward."),
        (C, "I like keeping records, lists and files well organised."),
        (C, "I prefer clear procedures over improvisation."),
        (C, "Checking work carefully for errors comes naturally to me."),
        (C, "I enjoy working with schedules, budgets or spreadsheets."),
        (Logical, "I can usually spot the pattern in a sequence or puzzle."),
        (Logical, "I enjoy strategy games that require planning several moves ahead."),
        (Logical, "Breaking a big problem into smaller steps comes easily to me."),
        (Numerical, "I am comfortable doing quick arithmetic in my head."),
        (Numerical, "Interpreting charts and tables of numbers is easy for me."),
        (Numerical, "I enjoy working through percentage and ratio problems."),
        (Verbal, "I can summarise a long passage accurately after one reading."),
        (Verbal, "I pick up the precise meaning of new words quickly."),
        (Leadership, "People tend to follow my lead in group situations."),
        (Leadership, "I am comfortable making decisions on behalf of a team."),
        (Leadership, "I speak up first when a group needs direction."),
        (Teamwork, "I work better with others than completely alone."),
        (Teamwork, "I make a point of hearing everyone out before we decide."),
        (Teamwork, "I willingly take the less glamorous tasks so the team succeeds."),
        (Discipline, "I finish my work before turning to entertainment."),
        (Discipline, "I stick to a study or practice schedule without reminders."),
    ];

    statements
        .iter()
        .enumerate()
        .map(|(i, (category, text))| question(i as i32 + 1, *category, text))
        .collect()
}

fn branch(slug: &str, name: &str, description: &str, work_area: &str) -> BranchSpec {
    BranchSpec {
        slug: slug.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        broad_work_area: Some(work_area.to_string()),
    }
}

pub fn branch_specs() -> Vec<BranchSpec> {
    vec![
        branch(
            "computer-science",
            "Computer Science Engineering",
            "Software systems, algorithms, data and computing infrastructure.",
            "Software, IT services, product companies",
        ),
        branch(
            "mechanical",
            "Mechanical Engineering",
            "Design, analysis and manufacturing of machines and thermal systems.",
            "Manufacturing, automotive, energy",
        ),
        branch(
            "electrical",
            "Electrical Engineering",
            "Power generation, transmission, electrical machines and control.",
            "Power utilities, heavy industry",
        ),
        branch(
            "civil",
            "Civil Engineering",
            "Structures, transportation, water resources and construction.",
            "Infrastructure, construction, public works",
        ),
        branch(
            "electronics-communication",
            "Electronics & Communication Engineering",
            "Circuits, embedded systems, signal processing and telecom networks.",
            "Electronics, telecom, semiconductors",
        ),
        branch(
            "chemical",
            "Chemical Engineering",
            "Industrial chemical processes, plant design and process control.",
            "Process industry, petrochemicals, pharma",
        ),
        branch(
            "aerospace",
            "Aerospace Engineering",
            "Aircraft and spacecraft design, propulsion and aerodynamics.",
            "Aviation, defence, space research",
        ),
        branch(
            "biotechnology",
            "Biotechnology Engineering",
            "Biological processes applied to medicine, agriculture and industry.",
            "Biotech, pharma, research labs",
        ),
        branch(
            "information-technology",
            "Information Technology",
            "Applied computing, networks, databases and enterprise software.",
            "IT services, enterprise software",
        ),
    ]
}

fn programme(
    branch_id: Option<i64>,
    stream: &str,
    degree_type: &str,
    full_name: &str,
    duration_years: i32,
    short_description: &str,
    eligibility: &str,
    tags: &[&str],
) -> ProgrammeSpec {
    ProgrammeSpec {
        branch_id,
        stream: stream.to_string(),
        degree_type: degree_type.to_string(),
        full_name: full_name.to_string(),
        duration_years,
        short_description: Some(short_description.to_string()),
        eligibility_12th_stream: Some(eligibility.to_string()),
        key_tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Degree programmes, engineering ones linked to their branch by slug.
pub fn programme_specs(branch_ids: &HashMap<String, i64>) -> Vec<ProgrammeSpec> {
    let id = |slug: &str| branch_ids.get(slug).copied();

    vec![
        programme(
            id("computer-science"),
            "Engineering",
            "B.Tech",
            "B.Tech Computer Science Engineering",
            4,
            "Programming, algorithms, operating systems and software projects.",
            "Science (PCM)",
            &["coding", "software", "ai"],
        ),
        programme(
            id("information-technology"),
            "Engineering",
            "B.Tech",
            "B.Tech Information Technology",
            4,
            "Applied computing with networks, databases and web systems.",
            "Science (PCM)",
            &["it", "networks", "databases"],
        ),
        programme(
            id("mechanical"),
            "Engineering",
            "B.Tech",
            "B.Tech Mechanical Engineering",
            4,
            "Machine design, thermodynamics and manufacturing processes.",
            "Science (PCM)",
            &["machines", "manufacturing", "design"],
        ),
        programme(
            id("electrical"),
            "Engineering",
            "B.Tech",
            "B.Tech Electrical Engineering",
            4,
            "Power systems, electrical machines and control engineering.",
            "Science (PCM)",
            &["power", "control"],
        ),
        programme(
            id("civil"),
            "Engineering",
            "B.Tech",
            "B.Tech Civil Engineering",
            4,
            "Structural analysis, construction management and surveying.",
            "Science (PCM)",
            &["construction", "infrastructure"],
        ),
        programme(
            id("electronics-communication"),
            "Engineering",
            "B.Tech",
            "B.Tech Electronics & Communication Engineering",
            4,
            "Analog and digital circuits, embedded systems and telecom.",
            "Science (PCM)",
            &["electronics", "embedded", "telecom"],
        ),
        programme(
            None,
            "Science",
            "B.Sc",
            "B.Sc Physics",
            3,
            "Classical and modern physics with laboratory work.",
            "Science (PCM/PCB)",
            &["research", "physics"],
        ),
        programme(
            None,
            "Commerce",
            "BBA",
            "Bachelor of Business Administration",
            3,
            "Management fundamentals, marketing, finance and entrepreneurship.",
            "Any stream",
            &["management", "business"],
        ),
        programme(
            None,
            "Arts",
            "BA",
            "BA Psychology",
            3,
            "Human behaviour, counselling basics and research methods.",
            "Any stream",
            &["psychology", "counselling"],
        ),
        programme(
            None,
            "Arts",
            "B.Des",
            "Bachelor of Design",
            4,
            "Visual communication, product design and design thinking.",
            "Any stream",
            &["design", "creativity"],
        ),
    ]
}

fn career(
    title: &str,
    description: &str,
    stream: &str,
    required_codes: Vec<CategoryCode>,
    typical_degree: &str,
) -> CareerSpec {
    CareerSpec {
        title: title.to_string(),
        description: description.to_string(),
        stream: stream.to_string(),
        required_codes,
        typical_degree: Some(typical_degree.to_string()),
    }
}

pub fn career_specs() -> Vec<CareerSpec> {
    use CategoryCode::*;

    vec![
        career(
            "Software Engineer",
            "Designs and builds software applications and systems.",
            "Science",
            vec![I, R],
            "B.Tech Computer Science",
        ),
        career(
            "Mechanical Engineer",
            "Designs, analyses and maintains machines and mechanical systems.",
            "Science",
            vec![R, I],
            "B.Tech Mechanical Engineering",
        ),
        career(
            "Graphic Designer",
            "Creates visual concepts for brands, products and media.",
            "Arts",
            vec![A],
            "Bachelor of Design",
        ),
        career(
            "Counselling Psychologist",
            "Helps people manage emotional, social and academic challenges.",
            "Arts",
            vec![S, I],
            "BA/MA Psychology",
        ),
        career(
            "Entrepreneur / Business Manager",
            "Starts and runs ventures, leads teams and manages operations.",
            "Commerce",
            vec![E, C],
            "BBA/MBA",
        ),
    ]
}
