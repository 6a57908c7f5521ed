//! Synthetic schema generation.

use std::fmt::Write;

/// Shape of a synthetic schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticSchema {
    /// Number of object types besides `Query`.
    pub objects: usize,
    /// Fields per object type.
    pub fields_per_object: usize,
    /// Number of unions; union `i` groups objects `i` and `i + 1`.
    pub unions: usize,
}

impl SyntheticSchema {
    /// Creates a synthetic schema shape.
    #[must_use]
    pub const fn new(objects: usize, fields_per_object: usize, unions: usize) -> Self {
        Self {
            objects,
            fields_per_object,
            unions,
        }
    }

    /// Renders the schema as SDL.
    ///
    /// `Query` exposes every object by id and every union; each object
    /// mixes scalar, list and nullable fields.
    #[must_use]
    pub fn to_sdl(&self) -> String {
        let mut sdl = String::from("type Query {\n");
        for i in 0..self.objects {
            let _ = writeln!(sdl, "  object{i}(id: ID!, limit: Int = 10): Object{i}");
        }
        for i in 0..self.unions {
            let _ = writeln!(sdl, "  union{i}: Union{i}!");
        }
        sdl.push_str("}\n\n");

        for i in 0..self.objects {
            let _ = writeln!(sdl, "type Object{i} {{\n  id: ID!");
            for f in 0..self.fields_per_object {
                let field_type = match f % 4 {
                    0 => "String".to_string(),
                    1 => "Int!".to_string(),
                    2 => "[Float!]".to_string(),
                    _ => format!("Object{}", (i + 1) % self.objects),
                };
                let _ = writeln!(sdl, "  field{f}: {field_type}");
            }
            sdl.push_str("}\n\n");
        }

        if self.objects > 0 {
            for i in 0..self.unions {
                let first = i % self.objects;
                let second = (i + 1) % self.objects;
                let _ = writeln!(sdl, "union Union{i} = Object{first} | Object{second}\n");
            }
        }

        sdl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_schema_parses_and_validates() {
        let sdl = SyntheticSchema::new(8, 6, 3).to_sdl();
        let schema = tsresolve_schema::parse_schema(&sdl).expect("Failed to parse");
        tsresolve_schema::validate_schema(&schema).expect("Failed to validate");

        assert_eq!(schema.types.len(), 1 + 8 + 3);
        assert_eq!(schema.unions().count(), 3);
    }

    #[test]
    fn test_synthetic_schema_generates() {
        let sdl = SyntheticSchema::new(4, 4, 2).to_sdl();
        let output = tsresolve_codegen::generate_from_sdl(&sdl, &Default::default())
            .expect("Failed to generate");
        assert!(output.contains("Union1: ( Object1 ) | ( Object2 );"));
    }
}
