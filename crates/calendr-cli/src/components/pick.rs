use super::config::ConfigArgs;

#[derive(clap::Args, Debug)]
pub struct PickArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print the result on a single line
    #[arg(long)]
    pub compact: bool,
}

pub async fn handle_pick(args: PickArgs) -> color_eyre::Result<()> {
    let config = args.config.load_config()?;
    let outcome = calendr_tui::tui_main(config).await?;
    let out = if args.compact {
        serde_json::to_string(&outcome)?
    } else {
        serde_json::to_string_pretty(&outcome)?
    };
    println!("{}", out);
    Ok(())
}
