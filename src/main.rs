use anyhow::Context;
use clap::Parser;
use recipe_book::{cli, client, config, gate, list, logging};
use recipe_book_common::{AllRecipes, Favorites};
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Recipes(args) => {
            let config = Config::load().context("falha ao carregar a configuração")?;
            println!("{}", list::run::<AllRecipes>(&config, &args).await?);
        }

        Commands::Favorites(args) => {
            let config = Config::load().context("falha ao carregar a configuração")?;
            println!("{}", list::run::<Favorites>(&config, &args).await?);
        }

        Commands::Session => {
            let config = Config::load().context("falha ao carregar a configuração")?;
            let client = client::ApiClient::new(&config)?;
            let validity = gate::status(&client, config.is_authenticated()).await?;
            println!("✔ Sessão autenticada");
            if !validity.valid {
                println!("  (o servidor informou que a sessão não é válida)");
            }
        }

        Commands::Config { set_api_url, set_token, clear_token, show } => {
            // 環境変数の値を保存しないようファイルだけ読む
            let mut config = Config::load_file()?;
            let changed = set_api_url.is_some() || set_token.is_some() || clear_token;

            config.apply_overrides(set_api_url, set_token);
            if clear_token {
                config.access_token = None;
            }
            if changed {
                config.save()?;
                println!("✔ Configuração salva em {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Configuração:");
                println!("  API: {}", config.api_base_url);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  Ordenação padrão: {} {}", config.default_sort.field, config.default_sort.order);
                println!("  Token: {}", if config.is_authenticated() { "definido" } else { "não definido" });
            }
        }
    }

    Ok(())
}
