//! Follow-up menu presented after a tag has been created.
//!
//! The loop reads single-line input until a recognized choice is entered;
//! unrecognized input reprompts. Choices are matched case-sensitively and
//! exactly. The loop is generic over its reader/writer so tests can drive
//! it with an in-memory cursor.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::git::Repository;

/// A recognized follow-up action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Print the new tag's message
    Show,
    /// Delete the new tag locally
    Delete,
    /// Push the new tag to the remote
    Push,
    /// Do nothing further
    Quit,
}

/// Parse a single input line into a menu choice.
///
/// Accepts `s`/`show`, `d`/`delete`, `p`/`push`, `q`/`quit` as exact,
/// case-sensitive matches; anything else is unrecognized.
pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input {
        "s" | "show" => Some(MenuChoice::Show),
        "d" | "delete" => Some(MenuChoice::Delete),
        "p" | "push" => Some(MenuChoice::Push),
        "q" | "quit" => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Print the menu and loop until a recognized choice is read.
///
/// Unrecognized input prints `Huh?!` and reprompts. End of input behaves
/// as quit so piped runs terminate cleanly.
pub fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    tag_name: &str,
) -> Result<MenuChoice> {
    writeln!(output)?;
    writeln!(output, "Tag {} created. What now?", tag_name)?;
    writeln!(output, "  s/show    show the new tag")?;
    writeln!(output, "  d/delete  delete the new tag")?;
    writeln!(output, "  p/push    push the new tag to the remote")?;
    writeln!(output, "  q/quit    quit")?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(MenuChoice::Quit);
        }

        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        match parse_choice(line) {
            Some(choice) => return Ok(choice),
            None => writeln!(output, "Huh?!")?,
        }
    }
}

/// Execute a menu choice against the repository.
///
/// Each action is one-shot. Returns the tag message for `Show` so the
/// caller can display it; the other choices return `None`.
pub fn execute_choice<G: Repository + ?Sized>(
    choice: MenuChoice,
    repo: &G,
    tag_name: &str,
    remote: &str,
) -> Result<Option<String>> {
    match choice {
        MenuChoice::Show => Ok(Some(repo.tag_message(tag_name)?)),
        MenuChoice::Delete => {
            repo.delete_tag(tag_name)?;
            Ok(None)
        }
        MenuChoice::Push => {
            repo.push_tag(remote, tag_name)?;
            Ok(None)
        }
        MenuChoice::Quit => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;
    use std::io::Cursor;

    #[test]
    fn test_parse_choice_short_and_long_forms() {
        assert_eq!(parse_choice("s"), Some(MenuChoice::Show));
        assert_eq!(parse_choice("show"), Some(MenuChoice::Show));
        assert_eq!(parse_choice("d"), Some(MenuChoice::Delete));
        assert_eq!(parse_choice("delete"), Some(MenuChoice::Delete));
        assert_eq!(parse_choice("p"), Some(MenuChoice::Push));
        assert_eq!(parse_choice("push"), Some(MenuChoice::Push));
        assert_eq!(parse_choice("q"), Some(MenuChoice::Quit));
        assert_eq!(parse_choice("quit"), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_parse_choice_is_case_sensitive() {
        assert_eq!(parse_choice("S"), None);
        assert_eq!(parse_choice("SHOW"), None);
        assert_eq!(parse_choice("Quit"), None);
    }

    #[test]
    fn test_parse_choice_rejects_partial_input() {
        assert_eq!(parse_choice("sh"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice(" q"), None);
    }

    #[test]
    fn test_prompt_reprompts_on_unrecognized_input() {
        let mut input = Cursor::new(b"x\nq\n".to_vec());
        let mut output = Vec::new();

        let choice = prompt_choice(&mut input, &mut output, "v1.5.0").unwrap();
        assert_eq!(choice, MenuChoice::Quit);

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(printed.matches("Huh?!").count(), 1);
    }

    #[test]
    fn test_prompt_returns_first_recognized_choice() {
        let mut input = Cursor::new(b"show\n".to_vec());
        let mut output = Vec::new();

        let choice = prompt_choice(&mut input, &mut output, "v1.5.0").unwrap();
        assert_eq!(choice, MenuChoice::Show);
    }

    #[test]
    fn test_prompt_treats_eof_as_quit() {
        let mut input = Cursor::new(b"".to_vec());
        let mut output = Vec::new();

        let choice = prompt_choice(&mut input, &mut output, "v1.5.0").unwrap();
        assert_eq!(choice, MenuChoice::Quit);
    }

    #[test]
    fn test_quit_executes_no_command() {
        let repo = MockRepository::new();
        let result = execute_choice(MenuChoice::Quit, &repo, "v1.5.0", "origin").unwrap();

        assert_eq!(result, None);
        assert_eq!(repo.mutation_count(), 0);
    }

    #[test]
    fn test_delete_deletes_the_tag() {
        let repo = MockRepository::new();
        execute_choice(MenuChoice::Delete, &repo, "v1.5.0", "origin").unwrap();

        assert_eq!(repo.deleted_tags(), vec!["v1.5.0".to_string()]);
    }

    #[test]
    fn test_push_pushes_to_the_remote() {
        let repo = MockRepository::new();
        execute_choice(MenuChoice::Push, &repo, "v1.5.0", "origin").unwrap();

        assert_eq!(
            repo.pushed_tags(),
            vec![("origin".to_string(), "v1.5.0".to_string())]
        );
    }

    #[test]
    fn test_show_returns_the_tag_message() {
        let repo = MockRepository::new();
        repo.create_annotated_tag("v1.5.0", "Version 1.5.0 (8)\n\nChanges:\n- feat: x\n")
            .unwrap();

        let message = execute_choice(MenuChoice::Show, &repo, "v1.5.0", "origin")
            .unwrap()
            .unwrap();
        assert!(message.starts_with("Version 1.5.0 (8)"));
    }
}
