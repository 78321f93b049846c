use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use zambool_cli::admin::create_admin;
use zambool_cli::seeder::{self, SeedConfig};
use zambool_db::{PgPool, init_db_pool};

#[derive(Parser)]
#[command(name = "zambool-cli")]
#[command(about = "Zambool CLI - Administrative tools for Zambool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new administrator account
    CreateAdmin {
        /// Login username
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake instructors, students, courses and enrollments
    Seed {
        /// Number of courses to create
        #[arg(short = 'c', long, default_value = "8")]
        courses: usize,

        /// Number of instructors
        #[arg(long, default_value = "4")]
        instructors: usize,

        /// Number of students
        #[arg(long, default_value = "60")]
        students: usize,

        /// Courses each student is enrolled in
        #[arg(long, default_value = "3")]
        per_student: usize,

        /// Capacity of every seeded course
        #[arg(long, default_value = "30")]
        capacity: i32,
    },
    /// Clear all seeded data (keeps admins and real accounts)
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let pool = match init_db_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin {
            username,
            name,
            password,
        } => handle_create_admin(&pool, username, name, password).await,
        Commands::Seed {
            courses,
            instructors,
            students,
            per_student,
            capacity,
        } => handle_seed(&pool, courses, instructors, students, per_student, capacity).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    username: Option<String>,
    name: Option<String>,
    password: Option<String>,
) {
    let username = username.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Username")
            .interact_text()
            .expect("Failed to read username")
    });

    let name = name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Display name")
            .interact_text()
            .expect("Failed to read name")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match create_admin(pool, &username, &name, &password).await {
        Ok(id) => {
            println!("\n✅ Admin created successfully!");
            println!("   Username: {}", username);
            println!("   Name: {}", name.trim());
            println!("   Id: {}", id);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating admin: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(
    pool: &PgPool,
    courses: usize,
    instructors: usize,
    students: usize,
    per_student: usize,
    capacity: i32,
) {
    let config = SeedConfig::new(courses)
        .with_users(instructors, students)
        .with_enrollments(per_student, capacity);

    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear_seed(pool: &PgPool) {
    if let Err(e) = seeder::clear_all(pool).await {
        eprintln!("\n❌ Error clearing seeded data: {}", e);
        std::process::exit(1);
    }
}
