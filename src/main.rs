// Copyright 2020 TwoCookingMice

use solidkit::core::shader::ShaderHandle;
use solidkit::core::solid::Solid;
use solidkit::math::constants::{ Float, Matrix4f, Vector3f };
use solidkit::math::transform::Transform;
use solidkit::shaders::flat::FlatShader;
use solidkit::solids::composite::CompositeSolid;
use solidkit::solids::mesh::MeshSolid;

use std::env;
use std::process;
use std::sync::Arc;

const USAGE: &str = "<mesh.obj>... [--pivot X Y Z] [--translate X Y Z] [--scale S] [--rotate x|y|z DEG]";

/// Command line after parsing; transforms keep their command-line order.
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    paths: Vec<String>,
    pivot: Option<Vector3f>,
    transforms: Vec<Matrix4f>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.get(0).cloned().unwrap_or_else(|| String::from("solidkit"));

    let options = match parse_args(args.get(1..).unwrap_or(&[])) {
        Some(options) => options,
        None => {
            eprintln!("Usage: {} {}", program, USAGE);
            process::exit(1);
        }
    };

    let shader: ShaderHandle = Arc::new(FlatShader::default());
    let mut meshes: Vec<MeshSolid> = Vec::with_capacity(options.paths.len());
    for path in &options.paths {
        match MeshSolid::from_file(Arc::clone(&shader), path) {
            Ok(mesh) => meshes.push(mesh),
            Err(err) => {
                eprintln!("{}: {}", path, err);
                process::exit(1);
            }
        }
    }

    let sources: Vec<&dyn Solid> = meshes.iter().map(|m| m as &dyn Solid).collect();
    let solid = build_solid(options.pivot.unwrap_or_else(Vector3f::zeros), &sources, &options.transforms);

    println!("primitives: {}", solid.len());
    let p = solid.pivot();
    println!("pivot: ({}, {}, {})", p.x, p.y, p.z);
    let bbox = solid.bounding_box();
    if bbox.is_valid() {
        println!("bounds: ({}, {}, {}) - ({}, {}, {})",
                 bbox.p_min.x, bbox.p_min.y, bbox.p_min.z,
                 bbox.p_max.x, bbox.p_max.y, bbox.p_max.z);
    } else {
        println!("bounds: empty");
    }
}

fn build_solid(pivot: Vector3f, sources: &[&dyn Solid], transforms: &[Matrix4f]) -> CompositeSolid {
    let mut solid = CompositeSolid::from_solids(pivot, sources);
    for t in transforms {
        solid.transform(t);
    }
    solid
}

// `None` means the arguments are unusable and the usage line should be shown.
fn parse_args(args: &[String]) -> Option<CliOptions> {
    let mut options = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--pivot" => {
                options.pivot = Some(parse_vec3(args, i + 1)?);
                i += 3;
            }
            "--translate" => {
                let t = parse_vec3(args, i + 1)?;
                options.transforms.push(*Transform::translate(&t).matrix());
                i += 3;
            }
            "--scale" => {
                let s = parse_float(args, i + 1)?;
                options.transforms.push(*Transform::scale(&Vector3f::new(s, s, s)).matrix());
                i += 1;
            }
            "--rotate" => {
                let axis = match args.get(i + 1).map(|a| a.as_str()) {
                    Some("x") => Vector3f::new(1.0, 0.0, 0.0),
                    Some("y") => Vector3f::new(0.0, 1.0, 0.0),
                    Some("z") => Vector3f::new(0.0, 0.0, 1.0),
                    _ => return None,
                };
                let degrees = parse_float(args, i + 2)?;
                options.transforms.push(*Transform::rotate(&axis, degrees).matrix());
                i += 2;
            }
            flag if flag.starts_with("--") => return None,
            path => options.paths.push(path.to_string()),
        }
        i += 1;
    }

    if options.paths.is_empty() {
        return None;
    }
    Some(options)
}

fn parse_float(args: &[String], i: usize) -> Option<Float> {
    args.get(i).and_then(|v| v.parse::<Float>().ok())
}

fn parse_vec3(args: &[String], i: usize) -> Option<Vector3f> {
    Some(Vector3f::new(parse_float(args, i)?, parse_float(args, i + 1)?, parse_float(args, i + 2)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use solidkit::solids::quad::QuadSolid;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_args_steps_over_values() {
        let options = parse_args(&args("a.obj --scale 2 b.obj --rotate z 90 --pivot 1 2 3 c.obj"));
        let options = match options {
            Some(options) => options,
            None => panic!("arguments are valid"),
        };
        assert_eq!(options.paths, vec!["a.obj", "b.obj", "c.obj"]);
        assert_eq!(options.pivot, Some(Vector3f::new(1.0, 2.0, 3.0)));
        assert_eq!(options.transforms.len(), 2);
        assert_eq!(options.transforms[0], *Transform::scale(&Vector3f::new(2.0, 2.0, 2.0)).matrix());
    }

    #[test]
    fn test_parse_args_rejects_bad_input() {
        assert!(parse_args(&args("")).is_none());
        assert!(parse_args(&args("--scale 2")).is_none());
        assert!(parse_args(&args("a.obj --scale")).is_none());
        assert!(parse_args(&args("a.obj --rotate w 90")).is_none());
        assert!(parse_args(&args("a.obj --translate 1 2")).is_none());
        assert!(parse_args(&args("a.obj --frobnicate")).is_none());
    }

    #[test]
    fn test_transforms_apply_in_order() {
        let quad = QuadSolid::new(Arc::new(FlatShader::default()),
                                  Vector3f::new(0.0, 0.0, 0.0),
                                  Vector3f::new(1.0, 0.0, 0.0),
                                  Vector3f::new(1.0, 1.0, 0.0),
                                  Vector3f::new(0.0, 1.0, 0.0));
        let options = match parse_args(&args("q.obj --translate 2 0 0 --rotate z 90")) {
            Some(options) => options,
            None => panic!("arguments are valid"),
        };

        // Translating first moves the pivot, so the rotation turns about (2, 0, 0).
        let solid = build_solid(Vector3f::zeros(), &[&quad], &options.transforms);
        let bbox = solid.bounding_box();
        assert_relative_eq!(bbox.p_min, Vector3f::new(1.0, 0.0, 0.0), epsilon = 1e-5);
        assert_relative_eq!(bbox.p_max, Vector3f::new(2.0, 1.0, 0.0), epsilon = 1e-5);
        assert_relative_eq!(solid.pivot(), Vector3f::new(2.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_missing_mesh_builds_empty_solid() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mesh = MeshSolid::from_file(Arc::new(FlatShader::default()), dir.path().join("gone.obj"))
            .expect("missing file is not an error");
        let solid = build_solid(Vector3f::zeros(), &[&mesh], &[]);
        assert!(solid.is_empty());
        assert!(!solid.bounding_box().is_valid());
    }
}
