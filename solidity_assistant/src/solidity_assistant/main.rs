//!
//! The Solidity assistant executable.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use deployment_pipeline::Workspace;
use solidity_assistant::ActiveDocument;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => deployment_pipeline::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            deployment_pipeline::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let workspace = Workspace::open(arguments.workspace)?;

    match arguments.command {
        Command::Template { file, line } => {
            let mut document = ActiveDocument::open_or_new(&workspace, file.as_path(), line)?;
            solidity_assistant::template::insert_erc20(&mut document);
            document.save()?;
            println!(
                "    {} ERC-20 template into {:?}",
                "Inserted".bright_green().bold(),
                document.path(),
            );
        }
        Command::Natspec { file } => {
            let mut document = ActiveDocument::open(&workspace, file.as_path(), 1)?;
            let today = chrono::Utc::now().date_naive();
            let count = solidity_assistant::natspec::document_contracts(&mut document, today);
            if count == 0 {
                anyhow::bail!("No contract declarations found in {:?}", document.path());
            }
            document.save()?;
            println!(
                "  {} NatSpec for {count} contract(s) in {:?}",
                "Documented".bright_green().bold(),
                document.path(),
            );
        }
        Command::Analyze { file, image } => {
            let analyzer = solidity_assistant::Analyzer::new(image);
            let files = match file {
                Some(file) => vec![file],
                None => solidity_assistant::Analyzer::sources(&workspace)?,
            };
            if files.is_empty() {
                anyhow::bail!("No Solidity sources found in {:?}", workspace.root());
            }
            for file in files.into_iter() {
                println!("   {} {file:?}", "Analyzing".bright_green().bold());
                let report = analyzer.run(&workspace, file.as_path())?;
                println!("{report}");
            }
        }
        Command::Deployment { network: None } => {
            for network in solidity_assistant::DeploymentInfo::networks(&workspace)? {
                println!("{network}");
            }
        }
        Command::Deployment {
            network: Some(network),
        } => {
            let info = solidity_assistant::DeploymentInfo::latest(&workspace, network.as_str())?;
            println!("{info}");
        }
        Command::Snippet {
            network,
            function,
            file,
            line,
        } => {
            let info = solidity_assistant::DeploymentInfo::latest(&workspace, network.as_str())?;
            let function = match function {
                Some(function) => function,
                None => {
                    for signature in solidity_assistant::snippet::signatures(&info.record) {
                        println!("{signature}");
                    }
                    return Ok(());
                }
            };

            let snippet =
                solidity_assistant::Snippet::new(&info.record, function.as_str())?.to_string();
            match (file, line) {
                (Some(file), Some(line)) => {
                    let mut document = ActiveDocument::open(&workspace, file.as_path(), line)?;
                    document.insert_at_line(snippet.as_str());
                    document.save()?;
                    println!(
                        "    {} snippet for `{function}` into {:?}",
                        "Inserted".bright_green().bold(),
                        document.path(),
                    );
                }
                _ => print!("{snippet}"),
            }
        }
        Command::Advise { question } if question.is_empty() => {
            println!(
                "{} ask about reentrancy, overflow, gas or front-running; `exit` to quit",
                "Web3 Security Chat:".bright_green().bold(),
            );
            let stdin = std::io::stdin();
            solidity_assistant::advisor::chat(stdin.lock(), std::io::stdout())?;
        }
        Command::Advise { question } => {
            println!("{}", solidity_assistant::advisor::advise(question.join(" ").as_str()));
        }
    }

    Ok(())
}
