#[macro_use]
extern crate log;

use std::env;
use std::io::{BufRead, BufWriter, IsTerminal, Write};

use clap::Parser;
use color_eyre::eyre::Result;
use serde::Serialize;

use fuzzy_highlight::options::FzhOptions;
use fuzzy_highlight::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    if let Err(err) = color_eyre::install() {
        warn!("could not install error report handler: {err}");
    }

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // downstream pipe closed, exit silently
            if err
                .downcast_ref::<std::io::Error>()
                .is_some_and(|e| e.kind() == std::io::ErrorKind::BrokenPipe)
            {
                std::process::exit(0)
            }
            eprintln!("{err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> FzhOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("fzh")));
    args.extend(
        env::var("FZH_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    FzhOptions::parse_from(args)
}

/// Reads one candidate per `line_ending` terminated record.
///
/// Bytes that are not valid UTF-8 are replaced, so a bad line still becomes a
/// candidate instead of failing the whole run.
fn read_candidates(mut source: impl BufRead, line_ending: u8) -> std::io::Result<Vec<String>> {
    let mut buffer = Vec::with_capacity(256);
    let mut lines = Vec::new();

    loop {
        buffer.clear();
        if source.read_until(line_ending, &mut buffer)? == 0 {
            break;
        }
        if line_ending == b'\n' && buffer.ends_with(b"\r\n") {
            buffer.truncate(buffer.len() - 2);
        } else if buffer.ends_with(&[line_ending]) {
            buffer.pop();
        }

        let line = String::from_utf8_lossy(&buffer).into_owned();
        trace!("got candidate {line:?} with index {}", lines.len());
        lines.push(line);
    }

    Ok(lines)
}

/// One line of `--json` output
#[derive(Serialize)]
struct JsonLine<'a> {
    index: usize,
    text: &'a str,
    #[serde(flatten)]
    result: &'a MatchResult,
}

fn real_main() -> Result<i32> {
    let opts = parse_args();

    if let Some(shell) = opts.shell {
        fuzzy_highlight::completions::generate(shell);
        return Ok(0);
    }

    let needle = opts.needle.clone().unwrap_or_default();
    debug!("needle {needle:?}, options {:?}", opts.matching);

    //------------------------------------------------------------------------------
    // read candidates from arguments or stdin
    let stdin_lines;
    let candidates: Vec<&str> = if !opts.candidates.is_empty() {
        opts.candidates.iter().map(String::as_str).collect()
    } else if !std::io::stdin().is_terminal() {
        let line_ending = if opts.read0 { b'\0' } else { b'\n' };
        stdin_lines = read_candidates(std::io::stdin().lock(), line_ending)?;
        stdin_lines.iter().map(String::as_str).collect()
    } else {
        Vec::new()
    };

    //------------------------------------------------------------------------------
    // match
    let mut matches = rank(&needle, candidates.iter().copied(), &opts.matching);
    if !opts.rank {
        matches.sort_by_key(|m| m.index);
    }
    debug!("{} of {} candidates matched", matches.len(), candidates.len());

    //------------------------------------------------------------------------------
    // output
    let ending = if opts.print0 { "\0" } else { "\n" };
    let mut stdout = BufWriter::new(std::io::stdout().lock());

    for m in &matches {
        if opts.json {
            let line = JsonLine {
                index: m.index,
                text: m.text,
                result: &m.result,
            };
            serde_json::to_writer(&mut stdout, &line).map_err(std::io::Error::from)?;
            write!(stdout, "{ending}")?;
            continue;
        }
        if opts.show_score {
            write!(stdout, "{}\t", m.result.score)?;
        }
        let highlighted = highlight(m.text, &m.result.ranges, &opts.matching.tag);
        write!(stdout, "{highlighted}{ending}")?;
    }

    stdout.flush()?;

    Ok(if matches.is_empty() { 1 } else { 0 })
}
