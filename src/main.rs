use clap::Parser;
use miette::{IntoDiagnostic, Result};
use staffroll::application::client_controller::ClientController;
use staffroll::application::payment::PaymentProcessor;
use staffroll::application::report::ReportGenerator;
use staffroll::config::load_salary_table;
use staffroll::domain::client::Client;
use staffroll::domain::employee::{Employee, EmployeeId, Role};
use staffroll::domain::roster::Roster;
use staffroll::domain::salary::{SalaryCalculator, SalaryTable};
use staffroll::infrastructure::StoreKind;
use staffroll::interfaces::csv::roster_reader::RosterReader;
use staffroll::logging;
use std::fs::File;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Roster CSV file with a `name,role` header. Defaults to the demo staff.
    #[arg(long)]
    roster: Option<PathBuf>,

    /// JSON file mapping role names to salaries. Defaults to the built-in table.
    #[arg(long)]
    salary_table: Option<PathBuf>,

    /// Client store backing the client controller.
    #[arg(long, value_enum, default_value_t = StoreKind::InMemory)]
    store: StoreKind,

    /// Pretty-print the payroll report.
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn demo_roster() -> Roster {
    let mut roster = Roster::new();
    roster.hire(Employee::new("José", Role::Intern));
    roster.hire(Employee::new("Maria", Role::Junior));
    roster.hire(Employee::new("João", Role::MidLevel));
    roster
}

fn demo_clients() -> Vec<Client> {
    vec![
        Client::new(1, "Ana"),
        Client::new(2, "Bruno").with_attribute("city", "Recife"),
        Client::new(1, "Ana").with_attribute("email", "ana@example.com"),
    ]
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let table = match cli.salary_table {
        Some(path) => load_salary_table(path).into_diagnostic()?,
        None => SalaryTable::default(),
    };
    let calculator = SalaryCalculator::new(table);
    let reports = ReportGenerator::new(calculator.clone());
    let payments = PaymentProcessor::new(calculator);

    let mut roster = match cli.roster {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            let mut roster = Roster::new();
            for employee in RosterReader::new(file).employees() {
                match employee {
                    Ok(employee) => {
                        roster.hire(employee);
                    }
                    Err(e) => {
                        eprintln!("Error reading employee: {}", e);
                    }
                }
            }
            roster
        }
        None => demo_roster(),
    };

    info!(
        employees = roster.len(),
        base_salary = %roster.base_salary(),
        "roster ready"
    );

    let report = if cli.pretty {
        reports.generate_json_pretty(&roster)
    } else {
        reports.generate_json(&roster)
    }
    .into_diagnostic()?;
    println!("{report}");

    if let Some(first) = roster.employees().first().map(|employee| employee.id) {
        println!("{}", employee_json(&roster, &first)?);
        payments.pay_by_id(&mut roster, &first).into_diagnostic()?;
        println!("{}", employee_json(&roster, &first)?);
    } else {
        warn!("roster is empty, nobody to pay");
    }

    let mut controller = ClientController::new(cli.store.build());
    for client in demo_clients() {
        controller.add_client(client).await.into_diagnostic()?;
    }
    let clients = controller.list_clients().await.into_diagnostic()?;
    println!("{}", serde_json::to_string(&clients).into_diagnostic()?);

    Ok(())
}

fn employee_json(roster: &Roster, id: &EmployeeId) -> Result<String> {
    let employee = roster
        .get(id)
        .ok_or_else(|| miette::miette!("employee {} left the roster", id))?;
    serde_json::to_string(employee).into_diagnostic()
}
