use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use steer_core::{
    Align, Arrive, Behavior, Flock, FlockSettings, Flocking, Kinematic, SteeringInput, Vector2D,
    Wander, WanderState,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless steering behavior scenarios", long_about = None)]
struct Args {
    /// Scenario to run
    #[arg(value_enum)]
    scenario: Scenario,

    /// Number of agents (flock scenario only)
    #[arg(short, long, default_value_t = 150)]
    count: usize,

    /// Number of simulation steps
    #[arg(short, long, default_value_t = 600)]
    steps: usize,

    /// Fixed frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// RNG seed for reproducible runs
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Emit one JSON line per sampled step instead of plain text
    #[arg(long)]
    json: bool,

    /// Print a snapshot every N steps
    #[arg(long, default_value_t = 30)]
    sample: usize,

    /// Target point for the seek scenario
    #[arg(long, default_value_t = 100.0)]
    target_x: f32,
    #[arg(long, default_value_t = 100.0)]
    target_y: f32,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scenario {
    /// One agent arrives at a point and aligns to face it
    Seek,
    /// One agent wanders the plane
    Wander,
    /// A full flock with wander fallback
    Flock,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    step: usize,
    agents: &'a [Kinematic],
}

fn emit(args: &Args, step: usize, agents: &[Kinematic]) -> Result<()> {
    if step % args.sample.max(1) != 0 {
        return Ok(());
    }
    if args.json {
        let line = serde_json::to_string(&Snapshot { step, agents })
            .context("failed to serialize snapshot")?;
        println!("{}", line);
    } else {
        let a = &agents[0];
        println!(
            "step {:5}  agents {:3}  first: pos ({:8.2}, {:8.2})  speed {:6.2}  heading {:5.2}",
            step,
            agents.len(),
            a.position.x,
            a.position.y,
            a.speed(),
            a.orientation,
        );
    }
    Ok(())
}

/// Arrive at a fixed point while aligning toward it, then freeze.
///
/// The freeze is deliberately caller policy: the behaviors themselves only
/// ever report accelerations.
fn run_seek(args: &Args) -> Result<()> {
    let arrive = Behavior::Arrive(Arrive {
        max_acceleration: 200.0,
        max_speed: 300.0,
        target_radius: 15.0,
        slow_radius: 20.0,
        time_to_target: 0.2,
    });
    let align = Behavior::Align(Align {
        max_angular_acceleration: 200.0,
        max_rotation: std::f32::consts::PI / 4.0,
        satisfaction_radius: 0.1,
        deceleration_radius: 0.1,
        time_to_target: 0.1,
    });

    let mut agent = Kinematic::at(Vector2D::new(400.0, 300.0));
    let target_pos = Vector2D::new(args.target_x, args.target_y);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut wander_state = WanderState::default();

    for step in 0..args.steps {
        // face the point we are heading for
        let to_target = target_pos - agent.position;
        let mut target = Kinematic::at(target_pos);
        target.orientation = if to_target.magnitude() > 0.001 {
            to_target.y.atan2(to_target.x)
        } else {
            agent.orientation
        };

        let input = SteeringInput::new(&agent, &target, args.dt);
        let arrive_out = arrive.steering(&input, &mut wander_state, &mut rng)?;
        let align_out = align.steering(&input, &mut wander_state, &mut rng)?;

        agent.velocity += arrive_out.linear * args.dt;
        agent.position += agent.velocity * args.dt;
        agent.rotation += align_out.angular * args.dt;
        agent.orientation =
            steer_core::wrap_angle(agent.orientation + agent.rotation * args.dt);

        if to_target.magnitude() < 1.0 && agent.speed() < 0.1 {
            agent.position = target_pos;
            agent.velocity = Vector2D::zero();
            agent.rotation = 0.0;
            log::info!("arrived and froze at step {}", step);
            emit(args, step, std::slice::from_ref(&agent))?;
            break;
        }

        emit(args, step, std::slice::from_ref(&agent))?;
    }

    log::info!(
        "final distance to target: {:.2}",
        agent.position.distance(&target_pos)
    );
    Ok(())
}

fn run_wander(args: &Args) -> Result<()> {
    let max_speed = 100.0;
    let behavior = Behavior::Wander(Wander {
        max_acceleration: 50.0,
        max_speed,
        wander_offset: 20.0,
        wander_radius: 100.0,
        wander_rate: 2.0,
        time_to_target: 0.1,
    });

    let mut agent = Kinematic::new(
        Vector2D::new(300.0, 300.0),
        Vector2D::new(50.0, 0.0),
        0.0,
        0.0,
    );
    let mut state = WanderState::default();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let dummy_target = Kinematic::default();

    for step in 0..args.steps {
        let input = SteeringInput::new(&agent, &dummy_target, args.dt);
        let out = behavior.steering(&input, &mut state, &mut rng)?;

        agent.integrate(&out, args.dt);
        agent.velocity = agent.velocity.limit(max_speed);
        agent.face_velocity();

        emit(args, step, std::slice::from_ref(&agent))?;
    }
    Ok(())
}

fn run_flock(args: &Args) -> Result<()> {
    let settings = FlockSettings {
        max_speed: 13.0,
        width: 800.0,
        height: 600.0,
    };
    let behavior = Flocking {
        neighbor_radius: 20.0,
        separation_radius: 20.0,
        separation_weight: 5.0,
        alignment_weight: 1.0,
        cohesion_weight: 1.0,
        max_acceleration: 250.0,
        wander: Wander {
            max_acceleration: 5.0,
            max_speed: 7.0,
            wander_offset: 10.0,
            wander_radius: 15.0,
            wander_rate: 1.0,
            time_to_target: 0.1,
        },
    };

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut flock = Flock::new(behavior, settings);
    let initial_speed = 13.0;
    for _ in 0..args.count {
        let position = Vector2D::new(
            rng.gen_range(0.0..settings.width),
            rng.gen_range(0.0..settings.height),
        );
        let heading = rng.gen_range(-std::f32::consts::PI..std::f32::consts::PI);
        let velocity = Vector2D::from_angle(heading) * initial_speed;
        flock.push(Kinematic::new(position, velocity, heading, 0.0));
    }
    log::info!("spawned {} boids", flock.len());

    for step in 0..args.steps {
        flock
            .tick(args.dt, &mut rng)
            .context("flock tick failed")?;
        emit(args, step, flock.agents())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    log::info!(
        "running {:?} scenario: steps={} dt={} seed={}",
        args.scenario,
        args.steps,
        args.dt,
        args.seed
    );

    match args.scenario {
        Scenario::Seek => run_seek(&args),
        Scenario::Wander => run_wander(&args),
        Scenario::Flock => run_flock(&args),
    }
}
