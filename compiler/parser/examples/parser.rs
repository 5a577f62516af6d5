// Copyright (C) 2024-2026 The Minc Team.
// This file is part of the Minc library.

// The Minc library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Minc library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Minc library. If not, see <https://www.gnu.org/licenses/>.

#![forbid(unsafe_code)]

use minc_errors::emitter::Handler;
use minc_parser::tokenizer::{Lexer, ParserOptions, ReaderSource};

use clap::Parser;
use std::{fs::File, io::BufReader, path::PathBuf, process};

#[derive(Debug, Parser)]
#[clap(name = "minc parser", about = "Parse a Minc source file and dump its AST")]
struct Opt {
    /// Path to the Minc file.
    input_path: PathBuf,

    /// Print the indented tree listing instead of JSON.
    #[clap(short, long)]
    tree: bool,

    /// Echo each source line to stdout as it is read.
    #[clap(long)]
    echo: bool,

    /// Trace every scanned token to stdout.
    #[clap(long)]
    trace: bool,
}

fn main() -> Result<(), String> {
    let opt = Opt::parse();

    let file = File::open(&opt.input_path).map_err(|e| format!("failed to open file: {e}"))?;
    let options = ParserOptions {
        echo_source: opt.echo,
        trace_scan: opt.trace,
        ..ParserOptions::default()
    };
    let mut lexer = Lexer::new(ReaderSource::new(BufReader::new(file)), options);
    if opt.echo || opt.trace {
        lexer.set_listing(Box::new(std::io::stdout()));
    }

    let handler = Handler::new();
    let ast = minc_parser::parse(&handler, lexer).map_err(|e| e.to_string())?;

    if opt.tree {
        print!("{}", ast.tree_string());
    } else {
        println!("{}", ast.to_json_string().map_err(|e| e.to_string())?);
    }

    if handler.had_errors() {
        process::exit(1);
    }
    Ok(())
}
