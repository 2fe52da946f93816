use anyhow::Result;
use clap::Parser;

use git_bump::boundary::BoundaryWarning;
use git_bump::config;
use git_bump::git::{Git2Repository, Repository};
use git_bump::menu::{self, MenuChoice};
use git_bump::resolver;
use git_bump::tag::TagPattern;
use git_bump::ui;
use git_bump::version::BumpKind;
use git_bump::workflow;

#[derive(clap::Parser)]
#[command(
    name = "git-bump",
    version,
    about = "Resolve the current version from tag history and create the next release tag"
)]
struct Args {
    #[arg(value_enum, help = "Which version component to bump")]
    bump: BumpKind,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Git remote used for fetch and push")]
    remote: Option<String>,

    #[arg(short, long, help = "Skip confirmation prompts and the follow-up menu")]
    force: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Do not fetch tags from the remote before resolving")]
    no_fetch: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let remote = args.remote.clone().unwrap_or_else(|| config.remote.clone());
    let pattern = TagPattern::new(&config.tag_pattern);

    let repo = match Git2Repository::discover() {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    // Make sure the local tag namespace reflects the remote before resolving
    if !args.no_fetch {
        ui::display_status(&format!("Fetching tags from '{}'...", remote));
        if let Err(e) = repo.fetch_tags(&remote) {
            ui::display_error(&format!("Failed to fetch tags from '{}': {}", remote, e));
            std::process::exit(1);
        }
        ui::display_success("Fetched tags");
    }

    let build_override = resolver::build_override_from_env();
    let plan = match workflow::plan_release(&repo, args.bump, &pattern, build_override) {
        Ok(plan) => plan,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_version_transition(&plan);
    ui::display_commit_list(&plan.commits);

    for warning in &plan.warnings {
        ui::display_boundary_warning(warning);
        if let BoundaryWarning::NoNewCommits { .. } = warning {
            if !args.force
                && !args.dry_run
                && !ui::confirm_action("Continue with no new commits?")?
            {
                println!("Operation cancelled by user.");
                return Ok(());
            }
        }
    }

    if args.dry_run {
        ui::display_dry_run_plan(&plan);
        return Ok(());
    }

    if !args.force && !ui::confirm_action(&format!("Create annotated tag '{}'?", plan.tag_name))? {
        println!("Tag creation cancelled by user.");
        return Ok(());
    }

    ui::display_status(&format!("Creating tag: {}", plan.tag_name));
    let result = match workflow::execute_release(&repo, &plan) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("Failed to create tag '{}': {}", plan.tag_name, e));
            std::process::exit(1);
        }
    };
    ui::display_success(&format!(
        "Created tag {} recording {} commit(s)",
        result.tag_name, result.commit_count
    ));

    if args.force || config.behavior.skip_menu {
        ui::display_manual_push_instruction(&result.tag_name, &remote);
        return Ok(());
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let choice = menu::prompt_choice(&mut input, &mut output, &result.tag_name)?;

    match menu::execute_choice(choice, &repo, &result.tag_name, &remote) {
        Ok(Some(message)) => ui::display_tag_message(&result.tag_name, &message),
        Ok(None) => match choice {
            MenuChoice::Delete => {
                ui::display_success(&format!("Deleted tag {}", result.tag_name));
            }
            MenuChoice::Push => {
                ui::display_success(&format!("Pushed tag {} to '{}'", result.tag_name, remote));
            }
            MenuChoice::Quit => {
                ui::display_manual_push_instruction(&result.tag_name, &remote);
            }
            MenuChoice::Show => {}
        },
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
