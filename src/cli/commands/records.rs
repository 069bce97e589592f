//! branches, log, status and tags commands - Parsed repository views

use anyhow::Result;
use serde::Serialize;

use super::Context;
use crate::parse::status::Status;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// List branches.
pub fn branches(ctx: &Context, all: bool, json: bool) -> Result<()> {
    let branches = ctx.repo()?.branches(all)?;
    if json {
        return print_json(&branches);
    }
    for branch in &branches {
        let marker = if branch.current {
            "* "
        } else if branch.worktree {
            "+ "
        } else {
            "  "
        };
        match &branch.target {
            Some(target) => println!("{}{} -> {}", marker, branch.name, target),
            None => println!("{}{}", marker, branch.name),
        }
    }
    Ok(())
}

/// Show recent commits, newest first.
pub fn log(ctx: &Context, max_count: Option<usize>, json: bool) -> Result<()> {
    let commits = ctx.repo()?.log(max_count)?;
    if json {
        return print_json(&commits);
    }
    for commit in &commits {
        println!(
            "{} {} {:<16} {}",
            commit.oid.short(7),
            commit.author.date.format("%Y-%m-%d"),
            commit.author.name,
            commit.subject
        );
    }
    Ok(())
}

/// Show working tree status.
pub fn status(ctx: &Context, json: bool) -> Result<()> {
    let status = ctx.repo()?.status()?;
    if json {
        return print_json(&status);
    }
    print_status(&status);
    Ok(())
}

fn print_status(status: &Status) {
    if let Some(branch) = &status.branch {
        let mut line = format!("On branch {}", branch.head);
        if let Some(upstream) = &branch.upstream {
            line.push_str(&format!(" (tracking {}", upstream));
            if branch.gone {
                line.push_str(", gone");
            }
            if branch.ahead > 0 {
                line.push_str(&format!(", ahead {}", branch.ahead));
            }
            if branch.behind > 0 {
                line.push_str(&format!(", behind {}", branch.behind));
            }
            line.push(')');
        }
        println!("{}", line);
    }

    if status.entries.is_empty() {
        println!("nothing to commit, working tree clean");
        return;
    }
    for entry in &status.entries {
        match &entry.original_path {
            Some(from) => println!("{}{} {} -> {}", entry.index, entry.worktree, from, entry.path),
            None => println!("{}{} {}", entry.index, entry.worktree, entry.path),
        }
    }
}

/// List tags as a JSON array.
pub fn tags(ctx: &Context) -> Result<()> {
    let tags = ctx.repo()?.tags()?;
    print_json(&tags)
}
