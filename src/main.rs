use std::{fs, io, path::{Path, PathBuf}, process::ExitCode, time::Instant};

use clap::Parser;
use rayon::prelude::*;
use tf_idf_relevance::{tokenize, Hits, TfIdfAnalyzer, TokenizedDocument};
use tracing_subscriber::EnvFilter;

/// Rank the text files of a directory against a query with TF-IDF.
///
/// Example:
///   tf-idf-relevance --docs ./data/docs --query "fast safe systems language" --top 5
#[derive(Debug, Parser)]
#[command(name = "tf-idf-relevance", version, about)]
struct Args {
    /// directory whose files are the documents (not recursive)
    #[arg(long, default_value = ".")]
    docs: PathBuf,

    /// query text, tokenized like the documents
    #[arg(long)]
    query: String,

    /// number of hits to print
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// print hits as JSON instead of `<score>\t<id>` lines
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let program_start = Instant::now();

    let documents = match load_documents(&args.docs) {
        Ok(docs) => docs,
        Err(e) => {
            tracing::error!(dir = %args.docs.display(), error = %e, "failed to load documents");
            return ExitCode::FAILURE;
        }
    };
    if documents.is_empty() {
        tracing::error!(dir = %args.docs.display(), "no documents loaded. abort");
        return ExitCode::FAILURE;
    }

    let index_start = Instant::now();
    let analyzer: TfIdfAnalyzer<String> = match TfIdfAnalyzer::new(&documents) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            tracing::error!(error = %e, "failed to build analyzer");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        documents = analyzer.doc_num(),
        vocabulary = analyzer.idf_scores().len(),
        elapsed_ms = index_start.elapsed().as_secs_f64() * 1000.0,
        "index built"
    );

    let query = tokenize(&args.query);
    if query.is_empty() {
        tracing::error!("empty query");
        return ExitCode::FAILURE;
    }

    let query_start = Instant::now();
    let hits = match analyzer.rank(&query, args.top) {
        Ok(hits) => hits,
        Err(e) => {
            tracing::error!(error = %e, "ranking failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        hits = hits.len(),
        elapsed_ms = query_start.elapsed().as_secs_f64() * 1000.0,
        "query scored"
    );

    if let Err(e) = print_hits(&hits, args.json) {
        tracing::error!(error = %e, "failed to write results");
        return ExitCode::FAILURE;
    }
    tracing::debug!(elapsed_ms = program_start.elapsed().as_secs_f64() * 1000.0, "done");
    ExitCode::SUCCESS
}

/// Read and tokenize every regular file of `dir` in parallel.
/// Unreadable files are skipped with a warning; the id is the file name.
fn load_documents(dir: &Path) -> io::Result<Vec<TokenizedDocument<String>>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    tracing::info!(files = files.len(), threads = rayon::current_num_threads(), "loading documents");

    let documents = files
        .par_iter()
        .filter_map(|path| {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    return None;
                }
            };
            let id = path.file_name()?.to_string_lossy().into_owned();
            Some(TokenizedDocument::from_text(id, &content))
        })
        .collect();
    Ok(documents)
}

fn print_hits(hits: &Hits<String, f64>, json: bool) -> io::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(hits).map_err(io::Error::other)?;
        println!("{out}");
    } else {
        print!("{hits}");
    }
    Ok(())
}
