use egui_code_editor::Syntax;

/// Normaliza el código para compararlo:
/// `\n` escrito a mano pasa a salto de línea real, los bloques de espacios
/// se reducen a un único espacio y se recortan los extremos.
pub fn normalize_code(input: &str) -> String {
    input
        .replace("\\n", "\n")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Corrección puramente sintáctica: dos programas equivalentes con distinto
/// formato o tokens se consideran distintos.
pub fn is_correct(user_code: &str, correct_code: &str) -> bool {
    normalize_code(user_code) == normalize_code(correct_code)
}

pub fn c_syntax() -> Syntax {
    Syntax::new("c")
        .with_comment("//")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "if", "else", "for", "while", "return", "break", "continue", "switch", "case",
            "default", "struct", "typedef", "enum", "union", "sizeof", "do", "goto", "static",
            "const", "volatile", "unsigned", "signed", "short", "long", "auto", "extern",
            "register", "NULL", "#include",
        ])
        .with_types([
            "int", "char", "float", "double", "void", "size_t", "uint8_t", "uint16_t",
            "uint32_t", "uint64_t", "Node", "Student",
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::QuestionBank;

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize_code("  int   x\t=\n\n 1;  "), "int x = 1;");
    }

    #[test]
    fn escaped_newlines_become_whitespace() {
        assert_eq!(normalize_code(r"a\nb"), "a b");
        assert_eq!(normalize_code("a\nb"), normalize_code(r"a\nb"));
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "",
            "   ",
            r#"printf(\"x\n\");"#,
            "int main() {\n\treturn 0;\n}\n",
            r"\n\n\\n weird \n",
        ];
        for s in samples {
            let once = normalize_code(s);
            assert_eq!(normalize_code(&once), once, "muestra: {s:?}");
        }

        for q in QuestionBank::embedded().unwrap().all() {
            let once = normalize_code(&q.buggy_code);
            assert_eq!(normalize_code(&once), once);
        }
    }

    #[test]
    fn grading_is_reflexive_for_every_question() {
        for q in QuestionBank::embedded().unwrap().all() {
            assert!(is_correct(&q.correct_code, &q.correct_code), "{}", q.id);
        }
    }

    #[test]
    fn buggy_code_never_passes() {
        for q in QuestionBank::embedded().unwrap().all() {
            assert!(!is_correct(&q.buggy_code, &q.correct_code), "{}", q.id);
        }
    }

    #[test]
    fn formatting_differences_are_ignored_but_tokens_are_not() {
        let reference = "int main() {\n    return 0;\n}";
        assert!(is_correct("int main() { return 0; }", reference));
        // Mismo comportamiento, distinto texto: se rechaza.
        assert!(!is_correct("int main(){return 0;}", reference));
    }
}
