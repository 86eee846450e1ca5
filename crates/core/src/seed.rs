//! Built-in dataset used before anything has been persisted.

use crate::model::{
    Assignment, CompletionMap, Course, CourseDraft, CourseId, Module, ModuleId, Quiz,
    QuizQuestion, User, UserDraft,
};
use crate::progress::Progress;

struct ModuleSpec {
    id: &'static str,
    title: &'static str,
    duration: &'static str,
    assignment: Option<&'static str>,
}

struct CourseSpec {
    id: u32,
    title: &'static str,
    category: &'static str,
    duration: &'static str,
    difficulty: &'static str,
    slug: &'static str,
    description: &'static str,
    modules: &'static [ModuleSpec],
}

const fn module(
    id: &'static str,
    title: &'static str,
    duration: &'static str,
    assignment: Option<&'static str>,
) -> ModuleSpec {
    ModuleSpec {
        id,
        title,
        duration,
        assignment,
    }
}

const COURSES: &[CourseSpec] = &[
    CourseSpec {
        id: 1,
        title: "Introduction to Artificial Intelligence",
        category: "AI",
        duration: "6 Weeks",
        difficulty: "Beginner",
        slug: "ai",
        description: "Search, knowledge representation, and the basics of machine learning.",
        modules: &[
            module("ai-m1", "What is AI?", "45 min", None),
            module("ai-m2", "Search Algorithms", "1 hr", Some("Implement A* on a grid")),
            module("ai-m3", "Knowledge Representation", "50 min", None),
            module("ai-m4", "Intro to Machine Learning", "1 hr 15 min", Some("Train a linear model")),
        ],
    },
    CourseSpec {
        id: 2,
        title: "Cybersecurity Fundamentals",
        category: "Security",
        duration: "4 Weeks",
        difficulty: "Intermediate",
        slug: "cs",
        description: "Threat models, cryptography basics, and secure network design.",
        modules: &[
            module("cs-m1", "Threat Modeling", "40 min", None),
            module("cs-m2", "Applied Cryptography", "1 hr", Some("Break a Caesar cipher")),
            module("cs-m3", "Network Defense", "55 min", None),
        ],
    },
    CourseSpec {
        id: 3,
        title: "Cloud Computing Essentials",
        category: "Cloud",
        duration: "5 Weeks",
        difficulty: "Beginner",
        slug: "cc",
        description: "Compute, storage, and networking building blocks of public clouds.",
        modules: &[
            module("cc-m1", "Cloud Service Models", "35 min", None),
            module("cc-m2", "Virtual Networks", "50 min", None),
            module("cc-m3", "Serverless Patterns", "1 hr", Some("Deploy a function")),
        ],
    },
    CourseSpec {
        id: 4,
        title: "Modern Web Development",
        category: "Web",
        duration: "8 Weeks",
        difficulty: "Intermediate",
        slug: "wd",
        description: "HTML, CSS, component frameworks, and shipping to production.",
        modules: &[
            module("wd-m1", "Semantic HTML", "30 min", None),
            module("wd-m2", "Layouts with CSS", "45 min", None),
            module("wd-m3", "Components and State", "1 hr", Some("Build a todo app")),
            module("wd-m4", "Deployment", "40 min", None),
        ],
    },
    CourseSpec {
        id: 5,
        title: "Project Management Basics",
        category: "Business",
        duration: "3 Weeks",
        difficulty: "Beginner",
        slug: "pm",
        description: "Planning, estimation, and keeping stakeholders aligned.",
        modules: &[
            module("pm-m1", "Scoping a Project", "30 min", None),
            module("pm-m2", "Estimation and Tracking", "45 min", Some("Write a project plan")),
        ],
    },
    CourseSpec {
        id: 6,
        title: "Data Structures & Algorithms",
        category: "Computer Science",
        duration: "10 Weeks",
        difficulty: "Advanced",
        slug: "dsa",
        description: "Complexity analysis, core data structures, and classic algorithms.",
        modules: &[
            module("dsa-m1", "Big-O Notation", "40 min", None),
            module("dsa-m2", "Arrays and Linked Lists", "50 min", None),
            module("dsa-m3", "Trees and Heaps", "1 hr", Some("Implement a binary heap")),
            module("dsa-m4", "Graphs", "1 hr 10 min", None),
            module("dsa-m5", "Dynamic Programming", "1 hr 20 min", Some("Solve knapsack")),
        ],
    },
];

const DEFAULT_ENROLLMENT: &[u32] = &[1, 2, 4, 5, 6];

const DEFAULT_COMPLETION: &[(u32, &[&str])] = &[
    (1, &["ai-m1"]),
    (2, &["cs-m1"]),
    (5, &["pm-m1"]),
    (6, &["dsa-m1"]),
];

/// The default course catalog, with progress matching [`default_completion`].
///
/// # Panics
///
/// Panics if the built-in dataset fails validation, which
/// `catalog_ids_are_unique_and_ordered` rules out.
#[must_use]
pub fn default_catalog() -> Vec<Course> {
    let completion = default_completion();
    COURSES
        .iter()
        .map(|spec| {
            let course = build_course(spec);
            let done = completion.get(&course.id()).map_or(0, Vec::len);
            let total = course.modules().len();
            course.with_progress(Progress::from_counts(done, total))
        })
        .collect()
}

#[must_use]
pub fn default_enrollment() -> Vec<CourseId> {
    DEFAULT_ENROLLMENT.iter().copied().map(CourseId::new).collect()
}

#[must_use]
pub fn default_completion() -> CompletionMap {
    DEFAULT_COMPLETION
        .iter()
        .map(|(course, modules)| {
            (
                CourseId::new(*course),
                modules.iter().map(|m| ModuleId::new(*m)).collect(),
            )
        })
        .collect()
}

/// # Panics
///
/// Panics if the built-in profile fails validation, which
/// `default_user_has_profile_details` rules out.
#[must_use]
pub fn default_user() -> User {
    UserDraft {
        name: "Alex Johnson".into(),
        email: "alex.johnson@example.com".into(),
        avatar_url: "https://i.pravatar.cc/150?u=a042581f4e29026704d".into(),
        roll_no: Some("CS-101".into()),
        year_of_passing: Some(2024),
        institute: Some("Learnova University".into()),
        bio: Some(
            "Passionate learner exploring the world of AI and web development.".into(),
        ),
    }
    .validate()
    .expect("default user should be valid")
}

fn build_course(spec: &CourseSpec) -> Course {
    let modules = spec
        .modules
        .iter()
        .map(|m| {
            Module::new(
                ModuleId::new(m.id),
                m.title,
                m.duration,
                format!("https://videos.example.com/{}/{}.mp4", spec.slug, m.id),
                format!("{}: {}", spec.title, m.title),
                quiz(&format!("{} Quiz", m.title), 70),
                m.assignment.map(|title| Assignment {
                    title: title.to_owned(),
                    description: format!("Hands-on practice for \"{}\".", m.title),
                }),
            )
        })
        .collect();

    CourseDraft {
        id: CourseId::new(spec.id),
        title: spec.title.to_owned(),
        category: spec.category.to_owned(),
        duration: spec.duration.to_owned(),
        image_url: format!("https://images.example.com/courses/{}.png", spec.slug),
        description: spec.description.to_owned(),
        modules,
        final_assessment: quiz(&format!("{} Final Assessment", spec.title), 75),
        difficulty: spec.difficulty.to_owned(),
    }
    .validate()
    .expect("seed course should be valid")
}

fn quiz(title: &str, passing_score: u32) -> Quiz {
    let options = |correct: &str| {
        vec![
            correct.to_owned(),
            "None of the above".to_owned(),
            "All of the above".to_owned(),
        ]
    };
    Quiz::new(
        title,
        vec![
            QuizQuestion::new(
                format!("Which statement best summarizes {title}?"),
                options("The key idea"),
                "The key idea",
            ),
            QuizQuestion::new(
                format!("What should you review after {title}?"),
                options("The lecture notes"),
                "The lecture notes",
            ),
        ],
        passing_score,
    )
    .expect("seed quiz should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = default_catalog().iter().map(|c| c.id().value()).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn enrollment_and_completion_reference_catalog_entries() {
        let catalog = default_catalog();
        let known: HashSet<CourseId> = catalog.iter().map(Course::id).collect();
        assert!(default_enrollment().iter().all(|id| known.contains(id)));

        for (course_id, modules) in default_completion() {
            let course = catalog.iter().find(|c| c.id() == course_id).unwrap();
            assert!(modules.iter().all(|m| course.has_module(m)));
        }
    }

    #[test]
    fn seeded_progress_matches_seeded_completion() {
        let progress: Vec<u8> = default_catalog()
            .iter()
            .map(|c| c.progress().value())
            .collect();
        assert_eq!(progress, [25, 33, 0, 0, 50, 20]);
    }

    #[test]
    fn seeded_quizzes_list_their_answers() {
        for course in default_catalog() {
            assert!(course.final_assessment().questions().iter().all(QuizQuestion::answer_is_listed));
            for m in course.modules() {
                assert!(m.quiz().questions().iter().all(QuizQuestion::answer_is_listed));
            }
        }
    }

    #[test]
    fn default_user_has_profile_details() {
        let user = default_user();
        assert_eq!(user.name(), "Alex Johnson");
        assert_eq!(user.roll_no(), Some("CS-101"));
        assert_eq!(user.year_of_passing(), Some(2024));
    }
}
