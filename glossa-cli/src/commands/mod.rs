//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use glossa_core::{Analyzer, AnalyzerBuilder};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::input::InputArgs;
use crate::output::Report;

pub mod application;
pub mod discourse;
pub mod generate_config;
pub mod lexical;
pub mod list;
pub mod semantic;
pub mod statistical;
pub mod syntax;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Language, size, script distribution and ambiguous words
    Profile(InputArgs),

    /// Tokens, stems and stopword filtering
    Tokens(InputArgs),

    /// Bigram and trigram model
    Ngrams(statistical::NgramsArgs),

    /// Perplexity heuristic and model quality
    Perplexity(InputArgs),

    /// Part-of-speech tags and phrases
    Tag(InputArgs),

    /// Constituency parse tree
    Tree(InputArgs),

    /// Named entities
    Entities(InputArgs),

    /// Word sense disambiguation and word similarity
    Senses(InputArgs),

    /// Pronouns and their antecedents
    Anaphora(InputArgs),

    /// Discourse coherence
    Coherence(InputArgs),

    /// Sentiment and emotional words
    Sentiment(InputArgs),

    /// Extractive summary
    Summarize(application::SummarizeArgs),

    /// Answer a question from a context text
    Ask(application::AskArgs),

    /// Rank documents against a query
    Search(application::SearchArgs),

    /// Language, sentiment, entities and summary in one report
    Overview(InputArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Write an editable configuration template
    #[command(name = "generate-config")]
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List output formats
    Formats,

    /// List detectable languages
    Languages,

    /// List part-of-speech tags
    Tags,
}

/// Shared state for analysis commands
pub struct Context {
    pub analyzer: Analyzer,
    pub config: CliConfig,
    pub quiet: bool,
}

impl Context {
    /// Build the analyzer. The lexicon comes from `lexicon_override`, then the
    /// configuration file, then the built-in one.
    pub fn new(config: CliConfig, lexicon_override: Option<&Path>, quiet: bool) -> Result<Self> {
        let lexicon_path: Option<PathBuf> = lexicon_override
            .map(Path::to_path_buf)
            .or_else(|| config.lexicon.path.clone());

        let mut builder =
            AnalyzerBuilder::new().summary_sentences(config.analysis.summary_sentences);
        if let Some(path) = &lexicon_path {
            log::info!("using lexicon {}", path.display());
            builder = builder.lexicon_file(path);
        }
        let analyzer = builder.build()?;

        Ok(Self {
            analyzer,
            config,
            quiet,
        })
    }
}

impl Commands {
    /// Command name used in log messages
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Profile(_) => "profile",
            Commands::Tokens(_) => "tokens",
            Commands::Ngrams(_) => "ngrams",
            Commands::Perplexity(_) => "perplexity",
            Commands::Tag(_) => "tag",
            Commands::Tree(_) => "tree",
            Commands::Entities(_) => "entities",
            Commands::Senses(_) => "senses",
            Commands::Anaphora(_) => "anaphora",
            Commands::Coherence(_) => "coherence",
            Commands::Sentiment(_) => "sentiment",
            Commands::Summarize(_) => "summarize",
            Commands::Ask(_) => "ask",
            Commands::Search(_) => "search",
            Commands::Overview(_) => "overview",
            Commands::Validate(_) => "validate",
            Commands::GenerateConfig(_) => "generate-config",
            Commands::List { .. } => "list",
        }
    }

    /// Run the command. Commands without output of their own (such as
    /// `generate-config`) return `None`.
    pub fn execute(
        &self,
        config: CliConfig,
        lexicon: Option<&Path>,
        quiet: bool,
    ) -> Result<Option<Report>> {
        match self {
            Commands::Validate(args) => args.execute().map(Some),
            Commands::GenerateConfig(args) => {
                args.execute(quiet)?;
                Ok(None)
            }
            Commands::List { subcommand } => Ok(Some(list::execute(*subcommand))),
            _ => {
                let ctx = Context::new(config, lexicon, quiet)?;
                self.analyze(&ctx).map(Some)
            }
        }
    }

    /// Run an analysis command against `ctx`
    pub fn analyze(&self, ctx: &Context) -> Result<Report> {
        match self {
            Commands::Profile(input) => lexical::profile(ctx, input),
            Commands::Tokens(input) => lexical::tokens(ctx, input),
            Commands::Ngrams(args) => args.execute(ctx),
            Commands::Perplexity(input) => statistical::perplexity(ctx, input),
            Commands::Tag(input) => syntax::tag(ctx, input),
            Commands::Tree(input) => syntax::tree(ctx, input),
            Commands::Entities(input) => semantic::entities(ctx, input),
            Commands::Senses(input) => semantic::senses(ctx, input),
            Commands::Anaphora(input) => discourse::anaphora(ctx, input),
            Commands::Coherence(input) => discourse::coherence(ctx, input),
            Commands::Sentiment(input) => application::sentiment(ctx, input),
            Commands::Summarize(args) => args.execute(ctx),
            Commands::Ask(args) => args.execute(ctx),
            Commands::Search(args) => args.execute(ctx),
            Commands::Overview(input) => application::overview(ctx, input),
            Commands::Validate(_) | Commands::GenerateConfig(_) | Commands::List { .. } => {
                anyhow::bail!("'{}' is not an analysis command", self.name())
            }
        }
    }
}
