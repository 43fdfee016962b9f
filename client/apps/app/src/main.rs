//! Client Entry Point
//!
//! Interactive shell over the library membership client. Uses `anyhow`
//! for startup errors; application-level failures surface through the
//! gate's boolean outcomes and the best-effort catalog reads.

use std::env;
use std::io::Write;
use std::sync::Arc;

use auth::AuthConfig;
use auth::application::gate::AuthGate;
use auth::infra::local_storage::{FileSessionStore, InMemoryPendingSlot};
use auth::presentation::dto::SessionStatus;
use auth::presentation::forms::{CodeForm, LoginForm, SignupForm};
use auth::presentation::guard::{Access, guard_view};
use auth::presentation::routes::Route;
use catalog::CatalogClient;
use platform::kv::JsonDocumentStore;
use platform::scope::ViewScope;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Gate = AuthGate<FileSessionStore, InMemoryPendingSlot>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,auth=info,catalog=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let session_file = env::var("SESSION_FILE").unwrap_or_else(|_| "session.json".to_string());
    let api_base_url =
        env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string());

    let session_store = Arc::new(FileSessionStore::new(JsonDocumentStore::new(&session_file)));
    let pending_store = Arc::new(InMemoryPendingSlot::new());
    let gate = Arc::new(AuthGate::new(
        session_store,
        pending_store,
        AuthConfig::default(),
    ));

    // Pick up the persisted session before any routing decision
    gate.restore().await?;

    let catalog = CatalogClient::new(api_base_url);

    tracing::info!(
        backend = %catalog.base_url(),
        session_file = %session_file,
        authenticated = gate.is_authenticated(),
        "Client started"
    );

    run(gate, catalog).await
}

async fn run(gate: Arc<Gate>, catalog: CatalogClient) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Library client. Type 'help' for commands.");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next().map(str::to_string);

        match command {
            "help" => print_help(),
            "status" => print_status(&gate).await,
            "login" => login(&gate, &mut lines).await?,
            "signup" => signup(&gate, &mut lines).await?,
            "verify" => verify(&gate, arg.as_deref()),
            "logout" => {
                gate.logout().await;
                println!("Signed out.");
            }
            "open" => match arg.as_deref() {
                Some(path) => open(&gate, &catalog, path).await,
                None => println!("Usage: open <path>"),
            },
            "students" => {
                for s in catalog.students().await {
                    println!(
                        "{}  {}  {}  plan={:?}  status={:?}  due={}",
                        s.registration_number, s.name, s.email, s.subscription_plan, s.payment_status, s.due_date
                    );
                }
            }
            "books" => {
                for b in catalog.books().await {
                    println!(
                        "{} by {}  [{}]  progress={}%",
                        b.title, b.author, b.category, b.reading_progress
                    );
                }
            }
            "libraries" => {
                for l in catalog.libraries().await {
                    println!(
                        "{}  {}  students={}  active={}",
                        l.id, l.name, l.total_students, l.active_subscriptions
                    );
                }
            }
            "payments" => {
                for p in catalog.payments().await {
                    println!(
                        "{}  {:.2}  {:?}  {}  via {:?}",
                        p.date, p.amount, p.status, p.plan, p.method
                    );
                }
            }
            "notifications" => {
                for n in catalog.notifications().await {
                    println!(
                        "{}  {:?}  \"{}\"  to {} recipients  {:?}",
                        n.sent_date, n.channel, n.subject, n.recipients, n.status
                    );
                }
            }
            "templates" => {
                for t in catalog.notification_templates().await {
                    println!("{}  {:?}  \"{}\"", t.name, t.channel, t.subject);
                }
            }
            "plans" => {
                for (tier, plan) in catalog.subscription_plans().await {
                    println!(
                        "{:?}: {:.2} / {}  ({})",
                        tier,
                        plan.price,
                        plan.duration,
                        plan.features.join(", ")
                    );
                }
            }
            "profile" => match catalog.admin_profile().await {
                Some(profile) => {
                    println!("{} <{}> {}", profile.name, profile.email, profile.phone);
                    if let Some(library) = profile.library {
                        println!("Library: {} at {}", library.name, library.address);
                    }
                }
                None => println!("No profile available."),
            },
            "stats" => match gate.current_identity() {
                Some(identity) => {
                    for stat in catalog.student_stats(&identity.id.to_string()).await {
                        println!("{} ({}): {}", stat.title, stat.period, stat.value);
                    }
                }
                None => println!("Not signed in."),
            },
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  status                 show the current session");
    println!("  login                  sign in with an email");
    println!("  signup                 register (confirm with 'verify')");
    println!("  verify <code>          confirm the pending registration");
    println!("  logout                 end the session");
    println!("  open <path>            navigate, e.g. open /student/dashboard");
    println!("  students | books | libraries | payments");
    println!("  notifications | templates | plans | profile | stats");
    println!("  quit");
}

async fn print_status(gate: &Gate) {
    let identity = gate.current_identity();
    let status = SessionStatus::from(identity.as_ref());
    match serde_json::to_string_pretty(&status) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(error = %e, "Failed to render session status"),
    }
    if gate.has_pending().await {
        if let Some(email) = gate.pending_email().await {
            println!("Registration pending verification for {email}");
        }
    }
}

async fn login(gate: &Gate, lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<()> {
    let form = LoginForm {
        email: prompt(lines, "Email").await?,
        password: prompt(lines, "Password").await?,
    };

    match form.validate() {
        Ok(input) => {
            if gate.login(input.email).await {
                print_status(gate).await;
            } else {
                println!("Login failed.");
            }
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

async fn signup(gate: &Gate, lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<()> {
    let role = prompt(lines, "Role (owner/student)").await?;
    let mut form = SignupForm {
        role,
        name: prompt(lines, "Name").await?,
        email: prompt(lines, "Email").await?,
        phone: prompt(lines, "Phone").await?,
        password: prompt(lines, "Password").await?,
        confirm_password: prompt(lines, "Confirm password").await?,
        ..Default::default()
    };

    match form.role.as_str() {
        "owner" => {
            form.library_name = prompt(lines, "Library name").await?;
            form.library_description = prompt(lines, "Library description (optional)").await?;
        }
        _ => {
            form.registration_number = prompt(lines, "Registration number").await?;
        }
    }

    match form.validate() {
        Ok(input) => {
            if gate.signup(input).await {
                println!("Registered. Confirm with: verify <code>");
            } else {
                println!("Signup failed.");
            }
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn verify(gate: &Arc<Gate>, code: Option<&str>) {
    let Some(code) = code else {
        println!("Usage: verify <code>");
        return;
    };
    let form = CodeForm {
        code: code.to_string(),
    };
    match form.validate() {
        Ok(code) => {
            // Runs on its own task so a second command submitted while the
            // code is still resolving gets rejected, not queued.
            let gate = gate.clone();
            tokio::spawn(async move {
                if gate.verify_code(&code).await {
                    println!("Verified. You are signed in.");
                } else {
                    println!("Verification failed.");
                }
            });
        }
        Err(e) => println!("{e}"),
    }
}

async fn open(gate: &Gate, catalog: &CatalogClient, path: &str) {
    let Some(route) = Route::from_path(path) else {
        println!("No such page: {path}");
        return;
    };

    let identity = gate.current_identity();
    match guard_view(&route, identity.as_ref(), gate.has_pending().await) {
        Access::Redirect(target) => println!("-> redirected to {}", target.path()),
        Access::Granted => {
            println!("Viewing {}", route.path());
            render_view(catalog, &route).await;
        }
    }
}

/// Fetch the data a view mounts with. Each fetch lives in the view's
/// scope; leaving the view drops the scope and aborts what is left.
async fn render_view(catalog: &CatalogClient, route: &Route) {
    let mut scope = ViewScope::new();

    match route {
        Route::StudentDashboard => {
            let books = catalog.clone();
            scope.spawn(async move {
                let list = books.books().await;
                println!("  books available: {}", list.len());
            });
            let libraries = catalog.clone();
            scope.spawn(async move {
                let list = libraries.libraries().await;
                if let Some(library) = list.first() {
                    println!("  your library: {}", library.name);
                }
            });
        }
        Route::OwnerDashboard => {
            let students = catalog.clone();
            scope.spawn(async move {
                let list = students.students().await;
                println!("  enrolled students: {}", list.len());
            });
            let libraries = catalog.clone();
            scope.spawn(async move {
                let list = libraries.libraries().await;
                if let Some(library) = list.first() {
                    println!(
                        "  active subscriptions: {}, monthly revenue: {:.2}",
                        library.active_subscriptions, library.monthly_revenue
                    );
                }
            });
        }
        _ => {}
    }

    scope.join_all().await;
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?.unwrap_or_default())
}
