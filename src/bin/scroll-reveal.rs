use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use scroll_reveal::{EventKind, PageDef, SectionController, Timeline, Variant};

#[derive(Parser, Debug)]
#[command(name = "scroll-reveal", version)]
struct Cli {
    /// Log engine internals (section mounts, evaluation passes) to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a page description and print every trigger event.
    Simulate(SimulateArgs),
    /// Print the choreography of a variant: regions, boundaries and scheduled steps.
    Timelines(TimelinesArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input page description JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print the final value of every written style property.
    #[arg(long)]
    dump_styles: bool,

    /// Emit the step reports as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct TimelinesArgs {
    /// Page variant.
    #[arg(long, value_enum, default_value_t = VariantChoice::Clinic)]
    variant: VariantChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Clinic,
    Noir,
}

impl From<VariantChoice> for Variant {
    fn from(choice: VariantChoice) -> Self {
        match choice {
            VariantChoice::Clinic => Variant::Clinic,
            VariantChoice::Noir => Variant::Noir,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Timelines(args) => cmd_timelines(args),
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let def = PageDef::from_path(&args.in_path)
        .with_context(|| format!("load page description '{}'", args.in_path.display()))?;
    let (steps, host) = def.simulate().with_context(|| "simulate page")?;

    if args.json {
        let out = serde_json::to_string_pretty(&steps).with_context(|| "serialize reports")?;
        println!("{out}");
    } else {
        for step in &steps {
            let pass = step.report.pass;
            for e in &step.report.events {
                println!(
                    "pass {pass} y={:.0} {} {}",
                    e.scroll,
                    e.label,
                    kind_name(e.kind)
                );
            }
            if let Some(ack) = &step.acknowledgment {
                println!("ack {ack}");
            }
        }
    }

    if args.dump_styles {
        for (target, property, value) in host.styles() {
            println!("{target} {property} = {value}");
        }
    }

    let events: usize = steps.iter().map(|s| s.report.events.len()).sum();
    eprintln!(
        "{} page: {} steps, {events} events",
        def.variant,
        steps.len().saturating_sub(1)
    );
    Ok(())
}

fn kind_name(kind: EventKind) -> String {
    match kind {
        EventKind::Enter => "enter".to_owned(),
        EventKind::LeaveBack => "leave-back".to_owned(),
        EventKind::Leave => "leave".to_owned(),
        EventKind::EnterBack => "enter-back".to_owned(),
        EventKind::Scrub { progress } => format!("scrub {progress:.3}"),
    }
}

fn cmd_timelines(args: TimelinesArgs) -> anyhow::Result<()> {
    let variant = Variant::from(args.variant);
    for section in variant.sections() {
        print_section(section.as_ref())
            .with_context(|| format!("build section '{}'", section.name()))?;
    }
    Ok(())
}

fn print_section(section: &dyn SectionController) -> anyhow::Result<()> {
    let plan = section.build()?;
    let layout = section.layout();
    println!("{} #{}", section.name(), layout.anchor);
    for region in &plan.regions {
        let trigger = region.trigger_id().unwrap_or("-");
        match region.end() {
            Some(end) => println!(
                "  region {} {:?} trigger={trigger} start=\"{}\" end=\"{end}\"",
                region.label(),
                region.mode(),
                region.start()
            ),
            None => println!(
                "  region {} {:?} trigger={trigger} start=\"{}\"",
                region.label(),
                region.mode(),
                region.start()
            ),
        }
        if let Some(tl) = region.timeline() {
            print_timeline(&tl.borrow());
        }
    }
    for tl in &plan.intros {
        println!("  intro");
        print_timeline(&tl.borrow());
    }
    if !plan.timers.is_empty() {
        println!("  timers {}", plan.timers.len());
    }
    Ok(())
}

fn print_timeline(tl: &Timeline) {
    println!(
        "    timeline {} delay={:.2}s total={:.2}s",
        tl.label(),
        tl.delay(),
        tl.total_duration()
    );
    for s in tl.steps() {
        let step = s.step();
        let props: Vec<String> = step
            .tweens()
            .iter()
            .map(|t| format!("{}: {} -> {}", t.property, t.from, t.to))
            .collect();
        println!(
            "      {:>5.2}s {:>5.2}s {} {} [{}]",
            s.start(),
            step.duration(),
            step.target(),
            step.ease(),
            props.join(", ")
        );
    }
}
