/// JVM type descriptor helpers.
///
/// Reflective handles describe types the way the Java language spells them
/// (`int`, `java.lang.String[]`), while class files store descriptors
/// (`I`, `[Ljava/lang/String;`).  Member signatures from both sources must
/// compare equal, so everything coming from the runtime side is converted
/// into descriptor form here before it reaches the matcher.

/// Map a primitive type keyword to its descriptor character.
fn primitive_descriptor(name: &str) -> Option<char> {
    let c = match name {
        "boolean" => 'Z',
        "byte" => 'B',
        "char" => 'C',
        "short" => 'S',
        "int" => 'I',
        "long" => 'J',
        "float" => 'F',
        "double" => 'D',
        "void" => 'V',
        _ => return None,
    };
    Some(c)
}

/// Convert a slash-separated internal name to its dotted binary form.
pub fn internal_to_dotted(name: &str) -> String {
    name.replace('/', ".")
}

/// Convert a dotted binary name to its slash-separated internal form.
pub fn dotted_to_internal(name: &str) -> String {
    name.replace('.', "/")
}

/// Build the descriptor for a reflective type name.
///
/// Accepts:
///   - primitive keywords (`int` → `I`)
///   - dotted class names (`java.lang.String` → `Ljava/lang/String;`)
///   - source-form arrays (`int[][]` → `[[I`)
///   - `Class::getName` array names (`[Ljava.lang.String;` → `[Ljava/lang/String;`)
pub fn type_descriptor(java_type: &str) -> String {
    let java_type = java_type.trim();

    // Already an array in binary-name form; only the separators differ.
    if java_type.starts_with('[') {
        return dotted_to_internal(java_type);
    }

    let mut base = java_type;
    let mut dimensions = 0;
    while let Some(stripped) = base.strip_suffix("[]") {
        base = stripped.trim_end();
        dimensions += 1;
    }

    let mut out = String::with_capacity(base.len() + dimensions + 2);
    for _ in 0..dimensions {
        out.push('[');
    }
    match primitive_descriptor(base) {
        Some(c) => out.push(c),
        None => {
            out.push('L');
            out.push_str(&dotted_to_internal(base));
            out.push(';');
        }
    }
    out
}

/// Build a method descriptor from reflective parameter and return types.
///
/// Example: `(["int", "java.lang.String"], "void")` → `(ILjava/lang/String;)V`
pub fn method_descriptor<S: AsRef<str>>(parameter_types: &[S], return_type: &str) -> String {
    let mut out = String::from("(");
    for param in parameter_types {
        out.push_str(&type_descriptor(param.as_ref()));
    }
    out.push(')');
    out.push_str(&type_descriptor(return_type));
    out
}
