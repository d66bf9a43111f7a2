use clap::{Args, Parser, Subcommand};
use recipe_book_common::{FilterCriteria, SortField, SortOrder, SortSpec};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-book")]
#[command(about = "Cliente de linha de comando para o livro de receitas", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Exibe logs detalhados
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lista todas as receitas
    Recipes(ListArgs),

    /// Lista as receitas favoritas
    Favorites(ListArgs),

    /// Verifica a sessão atual
    Session,

    /// Mostra/edita a configuração
    Config {
        /// URL base da API
        #[arg(long)]
        set_api_url: Option<String>,

        /// Token de acesso
        #[arg(long)]
        set_token: Option<String>,

        /// Remove o token salvo
        #[arg(long)]
        clear_token: bool,

        /// Mostra a configuração
        #[arg(long)]
        show: bool,
    },
}

/// Filtros e ordenação compartilhados pelos comandos de listagem
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Texto no título ou na descrição
    #[arg(short, long)]
    pub search: Option<String>,

    /// Dificuldade exata
    #[arg(short, long)]
    pub difficulty: Option<u8>,

    /// Tempo máximo de preparo (min)
    #[arg(short = 't', long)]
    pub max_prep_time: Option<u32>,

    /// Parte do nome de um ingrediente
    #[arg(short, long)]
    pub ingredient: Option<String>,

    /// Somente receitas geradas por IA (true) ou escritas por pessoas (false)
    #[arg(long)]
    pub ai: Option<bool>,

    /// Campo de ordenação (createdAt/likes/difficulty/prepTime)
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Direção (asc/desc)
    #[arg(short, long)]
    pub order: Option<SortOrder>,

    /// Lê a resposta JSON de um arquivo em vez de buscar na API
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Saída em JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            difficulty: self.difficulty,
            max_prep_time: self.max_prep_time,
            ingredient: self.ingredient.clone(),
            is_generated_by_ai: self.ai,
        }
    }

    /// 未指定の項目は設定の初期ソートを使う
    pub fn sort_spec(&self, default: SortSpec) -> SortSpec {
        SortSpec {
            field: self.sort.unwrap_or(default.field),
            order: self.order.unwrap_or(default.order),
        }
    }
}
