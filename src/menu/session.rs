//! Menu session
//!
//! Runs the interactive loop over a gradebook until the user exits or input
//! runs out. Failed operations are reported and the loop carries on; only
//! failures to write to the console end the session early.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, error};

use crate::gradebook::Gradebook;

use super::prompt::{Input, Prompter};
use super::render::{error_message, format_details, format_list, format_load_report, format_menu};
use super::MenuChoice;

/// Whether the loop keeps going after a command
enum Flow {
    Continue,
    Quit,
}

/// An interactive session over one gradebook
pub struct Session<R, W> {
    gradebook: Gradebook,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(gradebook: Gradebook, input: R, output: W) -> Self {
        Self {
            gradebook,
            prompter: Prompter::new(input, output),
        }
    }

    /// Load the data file, run the menu, then close the gradebook
    pub fn run(mut self) -> io::Result<()> {
        self.load()?;

        loop {
            write!(self.prompter.output(), "{}", format_menu())?;
            let choice = match self.prompter.ask::<i64>("Enter choice: ")? {
                Input::Value(code) => code,
                Input::Invalid => {
                    self.prompter.say("Invalid input. Please enter a number.")?;
                    continue;
                }
                Input::Eof => break,
            };

            let flow = match MenuChoice::from_code(choice) {
                Some(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice)?
                }
                None => {
                    self.prompter.say("Unknown option.")?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        self.finish()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::AddStudent => self.add_student(),
            MenuChoice::AddGrade => self.add_grade(),
            MenuChoice::List => {
                let text = format_list(self.gradebook.store());
                write!(self.prompter.output(), "{}", text)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Details => self.show_details(),
            MenuChoice::Save => {
                self.save()?;
                Ok(Flow::Continue)
            }
            MenuChoice::Load => {
                self.load()?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Quit),
        }
    }

    fn add_student(&mut self) -> io::Result<Flow> {
        if self.gradebook.store().is_full() {
            self.prompter.say("Cannot add more students (max reached).")?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompter.ask_line("Enter name: ")? else {
            self.prompter.say("Error reading name.")?;
            return Ok(Flow::Quit);
        };

        let id = match self.prompter.ask::<i32>("Enter id: ")? {
            Input::Value(id) => id,
            Input::Invalid => {
                self.prompter.say("Invalid ID input.")?;
                return Ok(Flow::Continue);
            }
            Input::Eof => return Ok(Flow::Quit),
        };

        match self.gradebook.add_student(&name, id) {
            Ok(()) => self.prompter.say("Student added!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn add_grade(&mut self) -> io::Result<Flow> {
        let id = match self.ask_id()? {
            Input::Value(id) => id,
            Input::Invalid => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Quit),
        };

        match self.gradebook.find(id) {
            None => {
                self.prompter.say(format!("Student with ID {} not found.", id))?;
                return Ok(Flow::Continue);
            }
            Some(student) if student.is_full() => {
                self.prompter
                    .say("This student already has the maximum number of grades.")?;
                return Ok(Flow::Continue);
            }
            Some(_) => {}
        }

        let value = match self.prompter.ask::<f32>("Enter grade (0 - 100): ")? {
            Input::Value(value) => value,
            Input::Invalid => {
                self.prompter.say("Invalid grade input.")?;
                return Ok(Flow::Continue);
            }
            Input::Eof => return Ok(Flow::Quit),
        };

        let path = self.data_file();
        let message = match self.gradebook.add_grade(id, value) {
            Ok(student) => format!(
                "Grade added to student {} (ID: {}).",
                student.name(),
                student.id()
            ),
            Err(e) => error_message(&e, &path),
        };
        self.prompter.say(message)?;
        Ok(Flow::Continue)
    }

    fn show_details(&mut self) -> io::Result<Flow> {
        let id = match self.ask_id()? {
            Input::Value(id) => id,
            Input::Invalid => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Quit),
        };

        let text = match self.gradebook.find(id) {
            Some(student) => format_details(student),
            None => format!("Student with ID {} not found.\n", id),
        };
        write!(self.prompter.output(), "{}", text)?;
        Ok(Flow::Continue)
    }

    /// Prompt for a student ID, reporting unparseable input
    fn ask_id(&mut self) -> io::Result<Input<i32>> {
        let input = self.prompter.ask::<i32>("Enter student ID: ")?;
        if let Input::Invalid = input {
            self.prompter.say("Invalid ID input.")?;
        }
        Ok(input)
    }

    fn save(&mut self) -> io::Result<()> {
        let path = self.data_file();
        match self.gradebook.save() {
            Ok(_) => self.prompter.say(format!("Data saved to '{}'.", path.display())),
            Err(e) => {
                error!(path = %path.display(), error = %e, "save failed");
                self.prompter.say(format!(
                    "Error opening file '{}' for writing.",
                    path.display()
                ))
            }
        }
    }

    fn load(&mut self) -> io::Result<()> {
        let path = self.data_file();
        match self.gradebook.load() {
            Ok(report) => {
                for line in format_load_report(&report, &path) {
                    self.prompter.say(line)?;
                }
                Ok(())
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "load failed");
                self.report(&e)
            }
        }
    }

    fn finish(self) -> io::Result<()> {
        let path = self.data_file();
        let Self {
            gradebook,
            mut prompter,
        } = self;

        match gradebook.close() {
            Ok(Some(_)) => prompter.say(format!("Data saved to '{}'.", path.display()))?,
            Ok(None) => {}
            Err(e) => {
                error!(path = %path.display(), error = %e, "autosave failed");
                prompter.say(format!(
                    "Error opening file '{}' for writing.",
                    path.display()
                ))?;
            }
        }
        prompter.say("Goodbye!")?;
        prompter.output().flush()
    }

    fn report(&mut self, error: &crate::GradebookError) -> io::Result<()> {
        let message = error_message(error, self.gradebook.data_file());
        self.prompter.say(message)
    }

    fn data_file(&self) -> PathBuf {
        self.gradebook.data_file().to_path_buf()
    }
}
