//! A tiny, forgiving GLSL scanner.
//!
//! This is not a compiler. It catches the mistakes that make a real driver
//! reject a stage outright (unbalanced brackets, no `main`), and it collects
//! the `uniform` declarations so that the headless backend can resolve
//! uniform names the way a linked program would. Unlike a real driver it
//! never optimizes unused uniforms away.

use crate::utils::FastHashMap;

use super::super::uniform::UniformVariableType;

/// The subset of GLSL types a uniform can be uploaded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlslType {
    /// `int`, `uint`, `bool` and every sampler.
    Int,
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
    /// Anything without a matching upload, e.g. `ivec3`.
    Other(String),
}

impl GlslType {
    pub fn parse(ty: &str) -> Self {
        match ty {
            "int" | "uint" | "bool" => GlslType::Int,
            "float" => GlslType::Float,
            "vec2" => GlslType::Vec2,
            "vec3" => GlslType::Vec3,
            "vec4" => GlslType::Vec4,
            "mat2" => GlslType::Mat2,
            "mat3" => GlslType::Mat3,
            "mat4" => GlslType::Mat4,
            _ if ty.starts_with("sampler")
                || ty.starts_with("isampler")
                || ty.starts_with("usampler") =>
            {
                GlslType::Int
            }
            _ => GlslType::Other(ty.to_owned()),
        }
    }

    /// Returns true if a variable of type `tp` can be uploaded to this type.
    pub fn accepts(&self, tp: UniformVariableType) -> bool {
        match *self {
            GlslType::Int => tp == UniformVariableType::I32,
            GlslType::Float => tp == UniformVariableType::F32,
            GlslType::Vec2 => tp == UniformVariableType::Vector2f,
            GlslType::Vec3 => tp == UniformVariableType::Vector3f,
            GlslType::Vec4 => tp == UniformVariableType::Vector4f,
            GlslType::Mat2 => tp == UniformVariableType::Matrix2f,
            GlslType::Mat3 => tp == UniformVariableType::Matrix3f,
            GlslType::Mat4 => tp == UniformVariableType::Matrix4f,
            GlslType::Other(_) => false,
        }
    }
}

/// A uniform as the program exposes it. Arrays and structs are flattened,
/// so `lights[1].color` is one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformDecl {
    pub name: String,
    pub ty: GlslType,
}

const PRECISIONS: [&str; 3] = ["lowp", "mediump", "highp"];

/// Checks a stage source. On failure returns an info log in the
/// `ERROR: 0:<line>: <message>` style most drivers use.
pub fn validate(source: &str) -> Result<(), String> {
    let code = strip_comments(source);
    if code.trim().is_empty() {
        return Err("ERROR: 0:0: '' : empty shader source".to_owned());
    }

    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut line = 1;
    for c in code.chars() {
        match c {
            '\n' => line += 1,
            '(' | '{' | '[' => stack.push((c, line)),
            ')' | '}' | ']' => {
                let open = match c {
                    ')' => '(',
                    '}' => '{',
                    _ => '[',
                };

                match stack.pop() {
                    Some((v, _)) if v == open => {}
                    _ => {
                        return Err(format!(
                            "ERROR: 0:{}: '{}' : syntax error, unexpected '{}'",
                            line, c, c
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    if let Some((c, line)) = stack.pop() {
        return Err(format!(
            "ERROR: 0:{}: '{}' : syntax error, unmatched '{}' at end of source",
            line, c, c
        ));
    }

    let tokens = tokenize(&code);
    let has_main = tokens
        .windows(3)
        .any(|w| w[0] == "void" && w[1] == "main" && w[2] == "(");

    if !has_main {
        return Err("ERROR: 0:0: 'main' : missing entry point 'void main()'".to_owned());
    }

    Ok(())
}

/// Collects the uniforms declared by a stage source, with `#define`d array
/// sizes and struct members expanded.
pub fn uniforms(source: &str) -> Vec<UniformDecl> {
    let code = strip_comments(source);

    let mut defines = FastHashMap::default();
    let mut body = String::with_capacity(code.len());
    for line in code.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') {
            let mut words = trimmed[1..].split_whitespace();
            if let (Some("define"), Some(name), Some(value)) =
                (words.next(), words.next(), words.next())
            {
                if let Ok(value) = value.parse::<usize>() {
                    defines.insert(name.to_owned(), value);
                }
            }
        } else {
            body.push_str(line);
            body.push('\n');
        }
    }

    let mut structs: FastHashMap<String, Vec<(String, String, usize)>> = FastHashMap::default();
    let mut decls = Vec::new();

    for statement in statements(&body) {
        let tokens = tokenize(&statement);
        if tokens.first().map(String::as_str) == Some("struct") {
            if let Some(name) = tokens.get(1) {
                let members = match tokens.iter().position(|v| v == "{") {
                    Some(open) => declarations(&tokens[open + 1..], &defines),
                    None => Vec::new(),
                };

                structs.insert(name.clone(), members);
            }

            continue;
        }

        let tokens = skip_layout(&tokens);
        if tokens.first().map(String::as_str) != Some("uniform") {
            continue;
        }

        // Interface blocks are not addressable through `glGetUniformLocation`.
        if tokens.iter().any(|v| v == "{") {
            continue;
        }

        for (ty, name, len) in declarations(&tokens[1..], &defines) {
            expand(&structs, &ty, &name, len, &mut decls);
        }
    }

    decls
}

fn expand(
    structs: &FastHashMap<String, Vec<(String, String, usize)>>,
    ty: &str,
    name: &str,
    len: usize,
    decls: &mut Vec<UniformDecl>,
) {
    let names: Vec<String> = if len == 0 {
        vec![name.to_owned()]
    } else {
        (0..len).map(|i| format!("{}[{}]", name, i)).collect()
    };

    for name in names {
        match structs.get(ty) {
            Some(members) => {
                for (member_ty, member, member_len) in members {
                    let path = format!("{}.{}", name, member);
                    expand(structs, member_ty, &path, *member_len, decls);
                }
            }
            None => decls.push(UniformDecl {
                name,
                ty: GlslType::parse(ty),
            }),
        }
    }
}

/// Parses `type a, b[4]; type c` style declarations into
/// `(type, name, array_len)`, where `array_len == 0` means "not an array".
fn declarations(
    tokens: &[String],
    defines: &FastHashMap<String, usize>,
) -> Vec<(String, String, usize)> {
    let mut out = Vec::new();
    let mut ty: Option<&str> = None;
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            ";" | "}" => ty = None,
            "," => {}
            _ if PRECISIONS.contains(&token) => {}
            _ if ty.is_none() => ty = Some(token),
            _ => {
                let mut len = 0;
                if tokens.get(i + 1).map(String::as_str) == Some("[") {
                    if let Some(size) = tokens.get(i + 2) {
                        len = size
                            .parse::<usize>()
                            .ok()
                            .or_else(|| defines.get(size).cloned())
                            .unwrap_or(1);
                    }

                    while i < tokens.len() && tokens[i] != "]" {
                        i += 1;
                    }
                }

                if let Some(ty) = ty {
                    out.push((ty.to_owned(), token.to_owned(), len));
                }
            }
        }

        i += 1;
    }

    out
}

fn skip_layout(tokens: &[String]) -> &[String] {
    if tokens.first().map(String::as_str) != Some("layout") {
        return tokens;
    }

    match tokens.iter().position(|v| v == ")") {
        Some(close) => &tokens[close + 1..],
        None => tokens,
    }
}

/// Splits on top-level `;`. A `}` returning to depth zero also ends a
/// statement, so function bodies never swallow the declaration after them.
fn statements(code: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in code.chars() {
        match c {
            '{' => {
                depth += 1;
                current.push(c);
            }
            '}' => {
                depth = depth.saturating_sub(1);
                current.push(c);
                if depth == 0 {
                    out.push(std::mem::replace(&mut current, String::new()));
                }
            }
            ';' if depth == 0 => out.push(std::mem::replace(&mut current, String::new())),
            _ => current.push(c),
        }
    }

    if !current.trim().is_empty() {
        out.push(current);
    }

    out
}

fn tokenize(code: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in code.chars() {
        if c.is_alphanumeric() || c == '_' || c == '.' {
            word.push(c);
            continue;
        }

        if !word.is_empty() {
            tokens.push(std::mem::replace(&mut word, String::new()));
        }

        if !c.is_whitespace() {
            tokens.push(c.to_string());
        }
    }

    if !word.is_empty() {
        tokens.push(word);
    }

    tokens
}

/// Replaces comments with whitespace, keeping line breaks so that line
/// numbers in diagnostics stay right.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'/') {
            while let Some(&n) = chars.peek() {
                if n == '\n' {
                    break;
                }
                chars.next();
            }
            out.push(' ');
        } else if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            let mut last = '\0';
            while let Some(n) = chars.next() {
                if n == '\n' {
                    out.push('\n');
                }

                if last == '*' && n == '/' {
                    break;
                }
                last = n;
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIGHTING: &str = r#"
        #version 330 core
        #define NR_POINT_LIGHTS 2

        struct Material {
            sampler2D diffuse;
            sampler2D specular;
            float shininess;
        };

        struct PointLight {
            vec3 position;
            float constant, linear;
        };

        layout (std140) uniform Matrices { mat4 projection; mat4 view; };

        uniform Material material;
        uniform PointLight pointLights[NR_POINT_LIGHTS];
        uniform highp vec3 viewPos; // camera
        /* uniform float ignored; */

        out vec4 FragColor;

        void main() {
            FragColor = vec4(viewPos, 1.0);
        }

        uniform bool blinn;
    "#;

    fn names(source: &str) -> Vec<String> {
        uniforms(source).into_iter().map(|v| v.name).collect()
    }

    #[test]
    fn flatten_structs_and_arrays() {
        assert_eq!(
            names(LIGHTING),
            vec![
                "material.diffuse",
                "material.specular",
                "material.shininess",
                "pointLights[0].position",
                "pointLights[0].constant",
                "pointLights[0].linear",
                "pointLights[1].position",
                "pointLights[1].constant",
                "pointLights[1].linear",
                "viewPos",
                "blinn",
            ]
        );
    }

    #[test]
    fn types() {
        let decls = uniforms(LIGHTING);
        assert_eq!(decls[0].ty, GlslType::Int);
        assert_eq!(decls[2].ty, GlslType::Float);
        assert_eq!(decls[9].ty, GlslType::Vec3);
        assert_eq!(decls[10].ty, GlslType::Int);
        assert!(GlslType::Mat4.accepts(UniformVariableType::Matrix4f));
        assert!(!GlslType::Mat4.accepts(UniformVariableType::F32));
        assert!(!GlslType::parse("ivec2").accepts(UniformVariableType::Vector2f));
    }

    #[test]
    fn layout_qualified_uniforms() {
        let src = "layout (location = 3) uniform mat4 model;\nvoid main() {}";
        assert_eq!(names(src), vec!["model"]);
    }

    #[test]
    fn validate_sources() {
        assert!(validate(LIGHTING).is_ok());

        let err = validate("void main() { gl_Position = vec4(0.0); ").unwrap_err();
        assert!(err.contains("unmatched '{'"), "{}", err);

        let err = validate("void main() {\n}\n}").unwrap_err();
        assert!(err.starts_with("ERROR: 0:3:"), "{}", err);

        let err = validate("uniform float x;").unwrap_err();
        assert!(err.contains("main"), "{}", err);

        assert!(validate("  // nothing here\n").is_err());
    }
}
