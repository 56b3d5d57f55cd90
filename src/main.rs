//! corelex — one-shot batch pipeline building the CoreLex classification
//! from a WordNet distribution.
//!
//! The only meaningful parameters are the lexicon version and the category;
//! everything else is file plumbing around the library pipeline.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use corelex_rs::{
    export, BasicTypeTable, Category, Corelex, CorelexTypeMap, Lexicon, SignificanceThresholds,
    WnVersion,
};

#[derive(Parser, Debug)]
#[command(name = "corelex", about = "Build the CoreLex classification from WordNet")]
struct Cli {
    /// Lexicon version (1.5 or 3.1)
    #[arg(long = "wn-version", default_value = "3.1")]
    wn_version: WnVersion,

    /// Category to classify (noun or verb)
    #[arg(long, default_value = "noun")]
    category: Category,

    /// Directory holding the distribution's index/data files
    #[arg(long, env = "CORELEX_DICT_DIR")]
    dict_dir: PathBuf,

    /// Output directory for the generated reports
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// Also write the pretty-wrapped classification
    #[arg(long)]
    pretty: bool,

    /// Also run the relation-significance analysis
    #[arg(long)]
    significance: bool,
}

/// Per-version file names inside the distribution directory.
fn index_and_data_files(version: WnVersion, category: Category) -> (String, String) {
    match version {
        WnVersion::V1_5 => {
            let stem = match category {
                Category::Noun => "NOUN",
                Category::Verb => "VERB",
            };
            (format!("{stem}.IDX"), format!("{stem}.DAT"))
        }
        WnVersion::V3_1 => (
            format!("index.{}", category),
            format!("data.{}", category),
        ),
    }
}

fn read_lines(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let (index_name, data_name) = index_and_data_files(cli.wn_version, cli.category);

    let index = read_lines(&cli.dict_dir.join(&index_name))?;
    let data = read_lines(&cli.dict_dir.join(&data_name))?;

    let mut lexicon = Lexicon::new(cli.wn_version);
    lexicon.load_index(cli.category, index.lines());
    lexicon.load_data(cli.category, data.lines());

    // the 3.1 distribution ships a sense index; load it when present
    let sense_path = cli.dict_dir.join("index.sense");
    if sense_path.is_file() {
        let sense = read_lines(&sense_path)?;
        lexicon.load_sense_index(sense.lines());
    }

    info!(
        version = %cli.wn_version,
        category = %cli.category,
        unresolved = lexicon.unresolved_pointers(cli.category),
        "lexicon loaded"
    );

    let corelex = Corelex::create(lexicon, cli.category);
    info!(
        basic_types = corelex.lexicon().basic_type_synsets(cli.category).len(),
        classes = corelex.classification().class_count(),
        "classification built"
    );

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("cannot create {}", cli.out_dir.display()))?;
    let stem = format!("corelex-{}-{}s", cli.wn_version, cli.category);

    let tab_path = cli.out_dir.join(format!("{stem}.tab"));
    let mut tab = fs::File::create(&tab_path)?;
    export::write_tab(corelex.classification(), &mut tab)?;
    info!(path = %tab_path.display(), "wrote classification");

    if cli.pretty {
        let txt_path = cli.out_dir.join(format!("{stem}.txt"));
        let mut txt = fs::File::create(&txt_path)?;
        export::write_pretty(corelex.classification(), &mut txt)?;
        info!(path = %txt_path.display(), "wrote pretty classification");
    }

    if cli.significance {
        let summary = corelex.summarize_relations();
        let reported = corelex.significant_pairs(&summary, SignificanceThresholds::default());
        let sig_path = cli.out_dir.join(format!("{stem}.significance.txt"));
        let mut sig = fs::File::create(&sig_path)?;
        export::write_significance(&reported, &summary, &mut sig)?;
        info!(pairs = reported.len(), path = %sig_path.display(), "wrote significance report");
    }

    if cli.category == Category::Noun {
        let stats = corelex
            .classification()
            .statistics(&CorelexTypeMap::builtin());
        info!(
            lemmas = stats.total,
            singleton = stats.singleton,
            untyped = stats.untyped,
            mapped = stats.mapped,
            unmapped = stats.unmapped,
            "classification coverage"
        );
        // flattened seed inventory, consumed by the SQL export collaborator
        let seed_rows = export::sql_basic_type_rows(&BasicTypeTable::builtin(cli.wn_version));
        let bt_path = cli.out_dir.join(format!("corelex-{}-basic-types.tab", cli.wn_version));
        let mut bt = fs::File::create(&bt_path)?;
        for (name, id, description) in &seed_rows {
            writeln!(bt, "{}\t{}\t{}", name, id, description)?;
        }
        info!(basic_types = seed_rows.len(), path = %bt_path.display(), "wrote basic-type inventory");
    }

    Ok(())
}
