// Session: everything one run of the tool mutates, owned in one place.

use crate::course::{is_auto_name_request, Course, CourseError, CourseStore, UnnamedCounter};
use crate::gpa::Summary;
use crate::grades::Grade;
use crate::storage::{self, StorageError};
use std::path::{Path, PathBuf};

/// What the add/edit flows collect before a `Course` exists. `name` is
/// the raw text typed by the user; empty or `0` means "generate one".
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    pub name: String,
    pub credits: u32,
    pub grade: Grade,
}

#[derive(Debug)]
pub struct Session {
    store: CourseStore,
    counter: UnnamedCounter,
    data_file: PathBuf,
    // Set when the data file exists but could not be read, so a save
    // would replace contents the session never saw.
    load_error: Option<String>,
}

impl Session {
    /// Load the data file. Load failures are logged and leave the session
    /// empty; they never stop the program.
    pub fn open(data_file: impl Into<PathBuf>) -> Self {
        let data_file = data_file.into();
        match storage::load(&data_file) {
            Ok(loaded) => {
                tracing::info!(
                    courses = loaded.courses.len(),
                    skipped = loaded.skipped,
                    path = %data_file.display(),
                    "loaded data file"
                );
                Self {
                    store: CourseStore::from(loaded.courses),
                    counter: UnnamedCounter::starting_at(loaded.max_unnamed_suffix),
                    data_file,
                    load_error: None,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not load data file; starting empty");
                // Keep the reason around; the exit flow asks before overwriting.
                Self {
                    load_error: Some(err.to_string()),
                    ..Self::empty(data_file)
                }
            }
        }
    }

    pub fn empty(data_file: impl Into<PathBuf>) -> Self {
        Self {
            store: CourseStore::new(),
            counter: UnnamedCounter::default(),
            data_file: data_file.into(),
            load_error: None,
        }
    }

    pub fn add(&mut self, draft: CourseDraft) -> Result<&Course, CourseError> {
        let course = self.build(draft)?;
        self.store.append(course);
        let last = self.store.len() - 1;
        Ok(&self.store.all()[last])
    }

    /// Replace the course at 0-based `index`. Returns the old course.
    pub fn edit(&mut self, index: usize, draft: CourseDraft) -> Result<Course, CourseError> {
        self.store.check_index(index)?;
        let course = self.build(draft)?;
        self.store.replace_at(index, course)
    }

    pub fn delete(&mut self, index: usize) -> Result<Course, CourseError> {
        self.store.remove_at(index)
    }

    pub fn save(&self) -> Result<(), StorageError> {
        storage::save(self.store.all(), &self.data_file)
    }

    pub fn courses(&self) -> &[Course] {
        self.store.all()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn summary(&self) -> Summary {
        Summary::of(self.store.all())
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Why the data file could not be read at startup, if it could not.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn counter(&self) -> UnnamedCounter {
        self.counter
    }

    // Credits are checked before a generated name is handed out so a
    // rejected draft does not burn a counter value.
    fn build(&mut self, draft: CourseDraft) -> Result<Course, CourseError> {
        let checked = Course::new(String::new(), draft.credits, draft.grade)?;
        // Empty or "0" asks for the next Unnamed Course number.
        let name = if is_auto_name_request(&draft.name) {
            self.counter.next_name()?
        } else {
            draft.name
        };
        Ok(checked.renamed(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, credits: u32, grade: Grade) -> CourseDraft {
        CourseDraft {
            name: name.to_string(),
            credits,
            grade,
        }
    }

    #[test]
    fn blank_and_zero_names_are_generated() {
        let mut session = Session::empty("unused.txt");
        assert_eq!(session.add(draft("", 3, Grade::A)).unwrap().name, "Unnamed Course 1");
        assert_eq!(session.add(draft("0", 3, Grade::A)).unwrap().name, "Unnamed Course 2");
        assert_eq!(session.add(draft("Physics", 3, Grade::A)).unwrap().name, "Physics");
        assert_eq!(session.counter().current(), 2);
    }

    #[test]
    fn edit_replaces_and_keeps_position() {
        let mut session = Session::empty("unused.txt");
        session.add(draft("Math", 3, Grade::A)).unwrap();
        session.add(draft("Art", 2, Grade::C)).unwrap();

        let old = session.edit(0, draft("Algebra", 4, Grade::BPlus)).unwrap();
        assert_eq!(old.name, "Math");
        assert_eq!(session.courses()[0].name, "Algebra");
        assert_eq!(session.courses()[0].credits(), 4);
        assert_eq!(session.courses()[1].name, "Art");
    }

    #[test]
    fn rejected_edit_does_not_consume_a_name() {
        let mut session = Session::empty("unused.txt");
        session.add(draft("Math", 3, Grade::A)).unwrap();

        let err = session.edit(4, draft("", 3, Grade::A)).unwrap_err();
        assert_eq!(err, CourseError::IndexOutOfRange { index: 4, len: 1 });
        assert!(session.add(draft("", 12, Grade::A)).is_err());
        assert_eq!(session.counter().current(), 0);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn delete_and_summary() {
        let mut session = Session::empty("unused.txt");
        session.add(draft("Math", 3, Grade::APlus)).unwrap();
        session.add(draft("Art", 4, Grade::B)).unwrap();
        assert_eq!(session.summary().total_hours, 7);

        let removed = session.delete(0).unwrap();
        assert_eq!(removed.name, "Math");
        assert_eq!(session.summary().gpa, 3.0);
        assert!(session.delete(1).is_err());
    }

    #[test]
    fn exhausted_counter_is_an_error() {
        let mut session = Session::empty("unused.txt");
        session.counter = UnnamedCounter::starting_at(u32::MAX);

        assert_eq!(
            session.add(draft("", 3, Grade::A)).unwrap_err(),
            CourseError::UnnamedCounterExhausted
        );
        assert!(session.is_empty());
        assert!(session.add(draft("Named", 3, Grade::A)).is_ok());
    }

    #[test]
    fn empty_session_has_no_load_error() {
        assert_eq!(Session::empty("unused.txt").load_error(), None);
    }
}
