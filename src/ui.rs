// UI layer: the interactive menu, built on `dialoguer` prompts.
// Every prompt re-asks until its validator accepts the answer, so the
// session only ever sees well-formed drafts and in-range indices.

use crate::course::MAX_CREDITS;
use crate::gpa::format_gpa;
use crate::grades::Grade;
use crate::session::{CourseDraft, Session};
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const RULE: &str = "----------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Edit,
    Delete,
    Exit,
}

impl MenuChoice {
    const ALL: [(MenuChoice, &'static str); 5] = [
        (MenuChoice::Add, "Add a Course"),
        (MenuChoice::View, "View Courses"),
        (MenuChoice::Edit, "Edit Courses"),
        (MenuChoice::Delete, "Delete a Course"),
        (MenuChoice::Exit, "Exit"),
    ];
}

/// Main interactive loop. Returns once the user exits via the menu.
pub fn main_menu(mut session: Session) -> Result<()> {
    loop {
        print_header(&session);
        let choice = prompt_parsed("Enter your choice", parse_menu_choice)?;
        match choice {
            MenuChoice::Add => {
                // Collect the details, then append to the end of the list.
                let draft = prompt_course_details()?;
                session.add(draft)?;
                println!("Course added successfully!");
            }
            MenuChoice::View => view_courses(&session),
            MenuChoice::Edit => {
                if session.is_empty() {
                    println!("No courses to edit.");
                } else {
                    // Show the list so the user can pick a number from it.
                    view_courses(&session);
                    let index = prompt_course_number(
                        "Enter the number of the course to edit",
                        session.len(),
                    )?;
                    let draft = prompt_course_details()?;
                    session.edit(index, draft)?;
                    println!("Course updated successfully!");
                }
            }
            MenuChoice::Delete => {
                if session.is_empty() {
                    println!("No courses to delete.");
                } else {
                    view_courses(&session);
                    let index = prompt_course_number(
                        "Enter the number of the course to delete",
                        session.len(),
                    )?;
                    let removed = session.delete(index)?;
                    println!("Deleted '{}'.", removed.name);
                }
            }
            MenuChoice::Exit => {
                // `false` means the save did not happen; back to the menu.
                if handle_exit(&session)? {
                    println!("Exiting. Goodbye!");
                    return Ok(());
                }
            }
        }
        println!();
    }
}

fn print_header(session: &Session) {
    println!("==============================================");
    println!("{}", "================GPA Calculator================".bold());
    println!("==============================================");
    if !session.is_empty() {
        let summary = session.summary();
        println!("Current GPA: {}", format_gpa(summary.gpa).green().bold());
        println!("Total completed hours: {}", summary.total_hours);
        println!("----------------------------------------------");
    }
    for (i, (_, label)) in MenuChoice::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, label);
    }
}

fn view_courses(session: &Session) {
    if session.is_empty() {
        println!("No courses to display.");
        return;
    }
    for (i, course) in session.courses().iter().enumerate() {
        println!("{RULE}");
        println!("{}.", i + 1);
        println!("   Course Name:    {}", course.name);
        println!("   Course Credits: {}", course.credits());
        println!("   Course Grade:   {}", course.grade);
    }
    println!("{RULE}");
}

/// Ask whether to save. Returns `true` when the program should exit.
fn handle_exit(session: &Session) -> Result<bool> {
    let save = prompt_parsed("Do you want to save your progress? (Yes | No)", parse_yes_no)?;
    if !save {
        return Ok(true);
    }

    // The file was there at startup but unreadable: saving now would
    // replace whatever it holds with only what this session knows about.
    if let Some(reason) = session.load_error() {
        println!("{} {reason}", "The data file could not be read at startup:".yellow());
        let overwrite = prompt_parsed(
            &format!("Overwrite {} anyway? (Yes | No)", session.data_file().display()),
            parse_yes_no,
        )?;
        if !overwrite {
            println!("Nothing was saved.");
            return Ok(false);
        }
    }

    // Spinner while the file is rewritten; cleared before any message.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Saving to {}...", session.data_file().display()));
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = session.save();
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            println!("Progress saved successfully.");
            Ok(true)
        }
        Err(e) => {
            // Stay in the menu: the courses are still in memory and the
            // user can retry or exit without saving.
            tracing::error!(error = %e, "save failed");
            println!("{} {e}", "Could not save:".red());
            println!("Your courses are still loaded; pick Exit again to retry.");
            Ok(false)
        }
    }
}

/// Collect name, credits and grade for the add and edit flows.
fn prompt_course_details() -> Result<CourseDraft> {
    let name: String = Input::new()
        .with_prompt("Course Name (Optional)")
        .allow_empty(true)
        .interact_text()
        .context("reading course name")?;
    let credits = prompt_parsed(&format!("Course Credits (0-{MAX_CREDITS})"), parse_credits)?;
    let grade = prompt_parsed("Course Grade (e.g., A+, B, C-)", parse_grade)?;
    Ok(CourseDraft {
        name,
        credits,
        grade,
    })
}

fn prompt_course_number(prompt: &str, len: usize) -> Result<usize> {
    prompt_parsed(prompt, move |input| parse_course_number(input, len))
}

/// Prompt until `parse` accepts the answer, then return the parsed value.
fn prompt_parsed<T>(prompt: &str, parse: impl Fn(&str) -> Result<T, String>) -> Result<T> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| parse(input).map(|_| ()))
        .interact_text()
        .with_context(|| format!("reading answer to '{prompt}'"))?;
    // The validator already accepted it, so this parse succeeds.
    parse(&answer).map_err(anyhow::Error::msg)
}

pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, String> {
    let invalid = || "Invalid option! Please enter a number from 1 to 5.".to_string();
    let n: usize = input.trim().parse().map_err(|_| invalid())?;
    n.checked_sub(1)
        .and_then(|i| MenuChoice::ALL.get(i))
        .map(|(choice, _)| *choice)
        .ok_or_else(invalid)
}

pub fn parse_credits(input: &str) -> Result<u32, String> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|c| *c <= u32::from(MAX_CREDITS))
        .ok_or_else(|| "Invalid input. Please enter a single digit number.".to_string())
}

pub fn parse_grade(input: &str) -> Result<Grade, String> {
    Grade::from_letter(input)
        .ok_or_else(|| "Invalid grade entered. Please use a valid grade.".to_string())
}

/// Turn a 1-based course number into a 0-based index below `len`.
pub fn parse_course_number(input: &str, len: usize) -> Result<usize, String> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| format!("Invalid number. Enter 1 to {len}."))
}

pub fn parse_yes_no(input: &str) -> Result<bool, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err("Invalid option! Please answer yes or no.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_accepts_one_through_five() {
        assert_eq!(parse_menu_choice("1"), Ok(MenuChoice::Add));
        assert_eq!(parse_menu_choice(" 2 "), Ok(MenuChoice::View));
        assert_eq!(parse_menu_choice("3"), Ok(MenuChoice::Edit));
        assert_eq!(parse_menu_choice("4"), Ok(MenuChoice::Delete));
        assert_eq!(parse_menu_choice("5"), Ok(MenuChoice::Exit));
        for bad in ["0", "6", "-1", "two", ""] {
            assert!(parse_menu_choice(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn credits_are_single_digits() {
        assert_eq!(parse_credits("0"), Ok(0));
        assert_eq!(parse_credits("9"), Ok(9));
        assert!(parse_credits("10").is_err());
        assert!(parse_credits("-3").is_err());
        assert!(parse_credits("three").is_err());
    }

    #[test]
    fn grades_are_case_insensitive() {
        assert_eq!(parse_grade("b-"), Ok(Grade::BMinus));
        assert_eq!(parse_grade("A+"), Ok(Grade::APlus));
        assert!(parse_grade("E").is_err());
    }

    #[test]
    fn course_numbers_are_one_based() {
        assert_eq!(parse_course_number("1", 3), Ok(0));
        assert_eq!(parse_course_number("3", 3), Ok(2));
        assert!(parse_course_number("0", 3).is_err());
        assert!(parse_course_number("4", 3).is_err());
        assert!(parse_course_number("1", 0).is_err());
        assert!(parse_course_number("x", 3).is_err());
    }

    #[test]
    fn yes_no_ignores_case() {
        assert_eq!(parse_yes_no("YES"), Ok(true));
        assert_eq!(parse_yes_no("No"), Ok(false));
        assert_eq!(parse_yes_no("y"), Ok(true));
        assert!(parse_yes_no("maybe").is_err());
    }
}
