//! Campus course CLI commands
//!
//! Table and JSON rendering for the list/search/show commands.

use anyhow::{Context, Result};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use uuid::Uuid;

use campus_core::catalog::{CatalogStore, CourseFilter};
use campus_core::model::{Course, CourseCategory, CourseDifficulty};

/// Table row for course listings
#[derive(Tabled)]
struct CourseRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Lessons")]
    lessons: usize,
    #[tabled(rename = "Instructor")]
    instructor: String,
}

impl CourseRow {
    fn from_course(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            category: course.category.to_string(),
            difficulty: course.difficulty.to_string(),
            duration: format!("{} min", course.estimated_duration),
            lessons: course.lessons.len(),
            instructor: course.instructor.clone(),
        }
    }
}

fn print_course_table(courses: &[&Course]) {
    let rows: Vec<CourseRow> = courses.iter().map(|c| CourseRow::from_course(c)).collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("{table}");
}

fn print_courses_json(courses: &[&Course]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(courses)?);
    Ok(())
}

pub fn execute_list(store: &CatalogStore, json: bool) -> Result<()> {
    let courses: Vec<&Course> = store.courses().iter().collect();

    if json {
        return print_courses_json(&courses);
    }

    if courses.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }

    println!("{} course(s) in the catalog:\n", courses.len());
    print_course_table(&courses);
    Ok(())
}

pub fn execute_search(
    store: &CatalogStore,
    query: Option<String>,
    category: Option<CourseCategory>,
    difficulty: Option<CourseDifficulty>,
    json: bool,
) -> Result<()> {
    let mut filter = CourseFilter::new();
    if let Some(q) = query {
        filter.set_query(q);
    }
    if let Some(c) = category {
        filter = filter.with_category(c);
    }
    if let Some(d) = difficulty {
        filter = filter.with_difficulty(d);
    }

    let results = store.query(&filter);

    if json {
        return print_courses_json(&results);
    }

    if results.is_empty() {
        println!("No courses found.");
        return Ok(());
    }

    println!("Found {} course(s):\n", results.len());
    print_course_table(&results);
    Ok(())
}

pub fn execute_show(store: &CatalogStore, course_ref: &str, json: bool) -> Result<()> {
    // Accept an id or a title
    let course = match course_ref.parse::<Uuid>() {
        Ok(id) => store.course(id),
        Err(_) => store.find_by_title(course_ref),
    }
    .with_context(|| format!("Course '{course_ref}' not found in catalog"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(course)?);
        return Ok(());
    }

    println!();
    println!("Course:     {}", course.title);
    println!("Id:         {}", course.id);
    println!("Category:   {}", course.category);
    println!("Difficulty: {}", course.difficulty);
    println!(
        "Duration:   {} min advertised, {} min of lessons",
        course.estimated_duration,
        course.lesson_minutes()
    );
    println!("Instructor: {}", course.instructor);
    println!();
    println!("{}", course.description);

    if course.lessons.is_empty() {
        println!("\nNo lessons published yet.");
        return Ok(());
    }

    println!("\nLessons:");
    for (index, lesson) in course.lessons.iter().enumerate() {
        let done = if lesson.is_completed { "x" } else { " " };
        println!(
            "  {:>2}. [{done}] {} ({}, {} min)",
            index + 1,
            lesson.title,
            lesson.lesson_type,
            lesson.duration
        );
        for resource in &lesson.resources {
            println!(
                "        - {} ({}) {}",
                resource.title, resource.resource_type, resource.url
            );
        }
    }

    Ok(())
}

pub fn execute_categories() {
    println!("Categories:");
    for category in CourseCategory::ALL {
        println!("  {category}");
    }

    println!("\nDifficulty levels:");
    for difficulty in CourseDifficulty::ALL {
        println!("  {difficulty}");
    }
}
