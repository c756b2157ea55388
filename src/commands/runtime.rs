use crate::*;

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    let command = cli.command();
    log::info!("running command {:?}", command);

    let script = match command {
        Commands::Run => Script::greeting(),
        Commands::Hello => Script::single(Step::Hello),
        Commands::Print { text } => Script::single(Step::print(text)),
        Commands::PrintMultiple { first, second } => {
            Script::single(Step::print_multiple(first, second))
        }
        Commands::Steps => {
            let script = Script::greeting();
            return print_out(cli.json, script.steps(), Step::describe);
        }
    };

    if cli.json {
        print_json(script.render())
    } else {
        let report = script.run(&mut Printer::stdout())?;
        log::debug!("printed {} lines", report.lines.len());
        Ok(())
    }
}
