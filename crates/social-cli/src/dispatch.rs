//! The interactive menu loop.
//!
//! Reads a choice, prompts for that choice's fields, runs one store
//! operation, and prints the outcome. A failed operation is printed and the
//! loop continues; only choosing Exit or reaching end of input stops it.

use std::io::{BufRead, Write};

use social_core::{NewPerson, PersonId, PersonSummary};
use social_graph::PeopleStore;

use crate::error::{CliError, Result};
use crate::menu::{render_menu, Choice, Operation};

/// Whether the loop should keep going after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Line-based prompt/response over arbitrary reader and writer.
struct Console<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Console<'_, R, W> {
    /// Print `label`, then read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn print_people(&mut self, people: &[PersonSummary], empty_message: &str) -> Result<()> {
        if people.is_empty() {
            return self.say(empty_message);
        }
        for person in people {
            writeln!(self.output, "ID: {}, Name: {}", person.id, person.name)?;
        }
        Ok(())
    }
}

/// Run the menu until Exit is chosen or `input` is exhausted.
pub async fn run_menu<S, R, W>(store: &S, input: &mut R, output: &mut W) -> Result<()>
where
    S: PeopleStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut console = Console { input, output };

    loop {
        render_menu(&mut *console.output)?;
        let Some(line) = console.prompt("Choose an option: ")? else {
            break;
        };

        let Some(choice) = Choice::parse(&line) else {
            console.say("Invalid option.")?;
            continue;
        };
        let Some(operation) = choice.operation() else {
            break;
        };

        match execute(store, operation, &mut console).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => break,
            Err(CliError::Io(e)) => return Err(CliError::Io(e)),
            Err(e) => {
                tracing::warn!(choice = choice.number(), error = %e, "Menu operation failed");
                console.say(&format!("{}: {e}", operation.error_prefix()))?;
            }
        }
    }

    tracing::debug!("Menu loop finished");
    Ok(())
}

async fn execute<S, R, W>(
    store: &S,
    operation: Operation,
    console: &mut Console<'_, R, W>,
) -> Result<Flow>
where
    S: PeopleStore + ?Sized,
    R: BufRead,
    W: Write,
{
    match operation {
        Operation::AddPerson => {
            let Some(name) = console.prompt("Name: ")? else {
                return Ok(Flow::Stop);
            };
            let Some(age) = console.prompt("Age: ")? else {
                return Ok(Flow::Stop);
            };
            let Some(location) = console.prompt("Location: ")? else {
                return Ok(Flow::Stop);
            };
            let age = parse_age(&age)?;

            let id = store.add_person(&NewPerson::new(name, age, location)).await?;
            console.say(&format!("Person added with ID: {id}"))?;
        }
        Operation::AddFriendship => {
            let Some(first) = console.prompt("First person ID: ")? else {
                return Ok(Flow::Stop);
            };
            let first = parse_id(&first)?;
            let Some(second) = console.prompt("Second person ID: ")? else {
                return Ok(Flow::Stop);
            };
            let second = parse_id(&second)?;

            store.add_friendship(first, second).await?;
            console.say("Friendship added.")?;
        }
        Operation::ListPeople => {
            let people = store.list_people().await?;
            console.print_people(&people, "No people registered.")?;
        }
        Operation::ShowFriends => {
            let Some(id) = console.prompt("Person ID: ")? else {
                return Ok(Flow::Stop);
            };
            let id = parse_id(&id)?;

            let friends = store.list_friends(id).await?;
            console.print_people(&friends, "This person has no friends registered.")?;
        }
        Operation::RemovePerson => {
            let Some(id) = console.prompt("ID of the person to remove: ")? else {
                return Ok(Flow::Stop);
            };
            let id = parse_id(&id)?;

            store.remove_person(id).await?;
            console.say("Person removed.")?;
        }
    }
    Ok(Flow::Continue)
}

fn parse_age(input: &str) -> Result<i64> {
    input.parse::<i64>().map_err(|_| CliError::InvalidNumber {
        field: "age",
        input: input.to_string(),
    })
}

fn parse_id(input: &str) -> Result<PersonId> {
    input.parse::<PersonId>().map_err(|_| CliError::InvalidNumber {
        field: "person ID",
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use social_graph::MemoryStore;

    use super::*;

    async fn drive(store: &MemoryStore, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(store, &mut input, &mut output).await.unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_exit_immediately() {
        let store = MemoryStore::new();
        let out = drive(&store, "6\n").await;
        assert!(out.contains("Social Network Menu:"));
        assert!(out.ends_with("Choose an option: "));
    }

    #[tokio::test]
    async fn test_end_of_input_stops_loop() {
        let store = MemoryStore::new();
        let out = drive(&store, "").await;
        assert_eq!(out.matches("Social Network Menu:").count(), 1);

        // Running out of input mid-operation also stops cleanly.
        let out = drive(&store, "1\nAna\n").await;
        assert!(out.ends_with("Age: "));
        assert!(store.list_people().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_and_list_people() {
        let store = MemoryStore::new();
        let out = drive(&store, "3\n1\nAna\n30\nSP\n1\nBea\n25\nRJ\n3\n6\n").await;

        assert!(out.contains("No people registered."));
        assert!(out.contains("Person added with ID: 0"));
        assert!(out.contains("Person added with ID: 1"));
        assert!(out.contains("ID: 0, Name: Ana\nID: 1, Name: Bea\n"));
    }

    #[tokio::test]
    async fn test_friendship_flow() {
        let store = MemoryStore::new();
        let ana = store
            .add_person(&NewPerson::new("Ana", 30, "SP"))
            .await
            .unwrap();
        let bea = store
            .add_person(&NewPerson::new("Bea", 25, "RJ"))
            .await
            .unwrap();

        let script = format!("4\n{ana}\n2\n{ana}\n{bea}\n4\n{ana}\n5\n{bea}\n4\n{ana}\n6\n");
        let out = drive(&store, &script).await;

        assert_eq!(out.matches("This person has no friends registered.").count(), 2);
        assert!(out.contains("Friendship added."));
        assert!(out.contains(&format!("ID: {bea}, Name: Bea")));
        assert!(out.contains("Person removed."));
        assert_eq!(
            store.list_people().await.unwrap(),
            vec![PersonSummary::new(ana, "Ana")]
        );
    }

    #[tokio::test]
    async fn test_invalid_option_continues() {
        let store = MemoryStore::new();
        let out = drive(&store, "9\nabc\n6\n").await;
        assert_eq!(out.matches("Invalid option.").count(), 2);
        assert_eq!(out.matches("Social Network Menu:").count(), 3);
    }

    #[tokio::test]
    async fn test_bad_numbers_are_reported_and_loop_continues() {
        let store = MemoryStore::new();
        let out = drive(&store, "1\nAna\nthirty\nSP\n2\nx\n5\n\n3\n6\n").await;

        assert!(out.contains("Error adding person: invalid age: \"thirty\" is not an integer"));
        assert!(out.contains("Error adding friendship: invalid person ID: \"x\" is not an integer"));
        assert!(out.contains("Error removing person: invalid person ID: \"\" is not an integer"));
        // A bad first id skips the second prompt.
        assert!(!out.contains("Second person ID: "));
        assert!(out.contains("No people registered."));
    }

    #[tokio::test]
    async fn test_friendship_with_unknown_ids_reports_success() {
        let store = MemoryStore::new();
        let out = drive(&store, "2\n7\n8\n6\n").await;
        assert!(out.contains("Friendship added."));
        assert_eq!(store.friendship_count().await, 0);
    }
}
