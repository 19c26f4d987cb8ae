// Library root
// -----------
// The binary (`main.rs`) is a thin wrapper; everything it does lives in
// these modules so it can be tested without a terminal.
//
// Module responsibilities:
// - `grades`: letter grade <-> grade point table.
// - `course`: course records, the ordered course list and the counter
//   behind generated `Unnamed Course N` names.
// - `gpa`: weighted GPA and total credit hours.
// - `storage`: the three-lines-per-course data file.
// - `session`: the state of one run (courses, counter, data file).
// - `config`, `cli`, `logging`: startup plumbing.
// - `ui`: the interactive menu; `report`: the non-interactive listing.
pub mod cli;
pub mod config;
pub mod course;
pub mod gpa;
pub mod grades;
pub mod logging;
pub mod report;
pub mod session;
pub mod storage;
pub mod ui;
