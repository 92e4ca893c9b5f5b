#[macro_use]
extern crate log;
extern crate mesh_sampler;
extern crate simplelog;

use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use mesh_sampler::sampling::DEFAULT_SAMPLE_COUNT;
use mesh_sampler::{Mesh, PcacheSink, PointCloudSink, SamplerBuilder, Texture};

struct CommandLine {
    mesh_path: PathBuf,
    texture_path: PathBuf,
    output_path: PathBuf,
    sample_count: usize,
    seed: Option<u64>,
    write_normals: bool,
    write_colors: bool
}

fn main() {
    if TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).is_err() {
        eprintln!("Logger could not be initialized");
    }

    let args : Vec<String> = env::args().collect();
    let program = args.first().map(|s| s.as_str()).unwrap_or("mesh-sampler");

    info!("Convert a textured OBJ model to a point cloud using uniform sampling. For more information, use: {} -h", program);

    let command_line = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(Some(command_line)) => command_line,
        Ok(None) => {
            print_help(program);
            return;
        },
        Err(msg) => {
            error!("{}", msg);
            print_help(program);
            process::exit(1);
        }
    };

    if let Err(err) = run(&command_line) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(command_line: &CommandLine) -> mesh_sampler::Result<()> {
    info!("Loading OBJ at {:?}...", command_line.mesh_path);
    let mesh = Mesh::load_from_file(&command_line.mesh_path)?;
    info!("Ok, {} triangles", mesh.triangle_count());

    let texture = if command_line.write_colors {
        info!("Loading texture at {:?}...", command_line.texture_path);
        let texture = Texture::load_from_file(&command_line.texture_path)?;
        info!("Ok, {}x{}", texture.width(), texture.height());
        Some(texture)
    } else {
        None
    };

    let mut builder = SamplerBuilder::new()
        .sample_count(command_line.sample_count)
        .normals(command_line.write_normals)
        .colors(command_line.write_colors);

    if let Some(seed) = command_line.seed {
        builder = builder.seed(seed);
    }

    let sampling = builder.build()?
        .sample(&mesh, texture.as_ref())?;

    PcacheSink::new(&command_line.output_path)
        .serialize(&sampling.cloud)
}

/// Parses the arguments after the program name. Returns `None` if help was requested.
fn parse_args(args: &[String]) -> Result<Option<CommandLine>, String> {
    let mut positional = Vec::new();
    let mut sample_count = DEFAULT_SAMPLE_COUNT;
    let mut seed = None;
    let mut write_normals = false;
    let mut write_colors = false;

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "-n_samples" => sample_count = parse_value(arg, args.next())?,
            "-seed" => seed = Some(parse_value(arg, args.next())?),
            "-write_normals" => write_normals = true,
            "-write_colors" => write_colors = true,
            flag if flag.starts_with('-') => return Err(format!("Unknown option {}", flag)),
            path => positional.push(PathBuf::from(path))
        }
    }

    if positional.len() != 3 {
        return Err(format!("Expected input OBJ, texture and output paths, got {} paths", positional.len()));
    }

    let output_path = positional.pop().unwrap_or_default();
    let texture_path = positional.pop().unwrap_or_default();
    let mesh_path = positional.pop().unwrap_or_default();

    if !has_extension(&mesh_path, "obj") {
        return Err(String::from("Need a single input OBJ file to continue."));
    }

    if !has_extension(&output_path, "pcache") {
        return Err(String::from("Need a single PCACHE file as output to continue."));
    }

    Ok(Some(CommandLine {
        mesh_path,
        texture_path,
        output_path,
        sample_count,
        seed,
        write_normals,
        write_colors
    }))
}

fn parse_value<T: FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("Missing value for {}", flag))?;
    value.parse()
        .map_err(|_| format!("Invalid value {:?} for {}", value, flag))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

fn print_help(program: &str) {
    eprintln!("Syntax is: {} input.obj texture.{{png, jpeg, ...}} output.pcache <options>", program);
    eprintln!("  where options are:");
    eprintln!("                     -n_samples X   = number of samples (default: {})", DEFAULT_SAMPLE_COUNT);
    eprintln!("                     -seed X        = seed for reproducible sampling (default: random)");
    eprintln!("                     -write_normals = flag to compute normals for each point");
    eprintln!("                     -write_colors  = flag to write texture colors to the output");
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn parse_full_command_line() {
        let command_line = parse_args(&args(&[
            "bunny.obj", "bunny.png", "bunny.pcache",
            "-n_samples", "500", "-seed", "9", "-write_colors"
        ])).unwrap().unwrap();

        assert_eq!(PathBuf::from("bunny.obj"), command_line.mesh_path);
        assert_eq!(PathBuf::from("bunny.png"), command_line.texture_path);
        assert_eq!(PathBuf::from("bunny.pcache"), command_line.output_path);
        assert_eq!(500, command_line.sample_count);
        assert_eq!(Some(9), command_line.seed);
        assert!(command_line.write_colors);
        assert!(!command_line.write_normals);
    }

    #[test]
    fn reject_bad_arguments() {
        assert!(parse_args(&args(&["bunny.obj", "bunny.png"])).is_err());
        assert!(parse_args(&args(&["bunny.ply", "bunny.png", "bunny.pcache"])).is_err());
        assert!(parse_args(&args(&["bunny.obj", "bunny.png", "bunny.pcd"])).is_err());
        assert!(parse_args(&args(&["bunny.obj", "bunny.png", "bunny.pcache", "-n_samples", "-3"])).is_err());
        assert!(parse_args(&args(&["bunny.obj", "bunny.png", "bunny.pcache", "-leaf_size", "0.1"])).is_err());
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(parse_args(&args(&["-h"])).unwrap().is_none());
    }
}
