use miniml::{
    error::{Fault, ParseError, RuntimeError},
    interpret_with,
    interpreter::value::Value,
    suite::{CASES, run_suite},
};

fn eval(source: &str) -> Value {
    match interpret_with(source, &mut Vec::new()) {
        Ok(value) => value,
        Err(fault) => panic!("'{source}' faulted: {fault}"),
    }
}

fn eval_captured(source: &str) -> (Value, String) {
    let mut out = Vec::new();
    let value = interpret_with(source, &mut out).unwrap();
    (value, String::from_utf8(out).unwrap())
}

fn fault(source: &str) -> Fault {
    match interpret_with(source, &mut Vec::new()) {
        Ok(value) => panic!("'{source}' evaluated to {value} instead of faulting"),
        Err(fault) => fault,
    }
}

#[test]
fn arithmetic_follows_precedence_and_associativity() {
    assert_eq!(eval("2 + 3 * 4"), Value::Int(14));
    assert_eq!(eval("2 * 3 + 4"), Value::Int(10));
    assert_eq!(eval("10 - 3 - 2"), Value::Int(5));
    assert_eq!(eval("100 div 10 div 2"), Value::Int(5));
    assert_eq!(eval("(2 + 3) * 4"), Value::Int(20));
}

#[test]
fn division_truncates_and_mod_follows_the_dividend() {
    assert_eq!(eval("7 div 2"), Value::Int(3));
    assert_eq!(eval("0 - 7 div 2"), Value::Int(-3));
    assert_eq!(eval("37 mod 10"), Value::Int(7));
    assert_eq!(eval("(0 - 37) mod 10"), Value::Int(-7));
}

#[test]
fn comparisons_yield_booleans() {
    assert_eq!(eval("1 < 2"), Value::Bool(true));
    assert_eq!(eval("2 < 1"), Value::Bool(false));
    assert_eq!(eval("3 = 3"), Value::Bool(true));
    assert_eq!(eval("3 = 4"), Value::Bool(false));
}

#[test]
fn comparisons_do_not_chain() {
    assert!(matches!(fault("1 < 2 < 3"),
                     Fault::Parse(ParseError::TrailingTokens { .. })));
}

#[test]
fn connectives_short_circuit_without_printing() {
    let (value, output) = eval_captured("false andalso (print 5; true)");
    assert_eq!(value, Value::Bool(false));
    assert_eq!(output, "");

    let (value, output) = eval_captured("true orelse (print 5; true)");
    assert_eq!(value, Value::Bool(true));
    assert_eq!(output, "");
}

#[test]
fn taken_operands_do_print() {
    let (value, output) = eval_captured("true andalso (print 5; true)");
    assert_eq!(value, Value::Bool(true));
    assert_eq!(output, "5");
}

#[test]
fn sequencing_runs_left_to_right_and_keeps_the_last_value() {
    let (value, output) = eval_captured("(print 1; print 2; print 3; 42)");
    assert_eq!(value, Value::Int(42));
    assert_eq!(output, "123");
}

#[test]
fn print_renders_defaults_without_newlines() {
    let (_, output) = eval_captured("(print (2,3); print true; print ())");
    assert_eq!(output, "(2,3)true()");
}

#[test]
fn pairs_construct_and_project() {
    assert_eq!(eval("fst (2,3)"), Value::Int(2));
    assert_eq!(eval("snd (2,3)"), Value::Int(3));
    assert_eq!(eval("fst (snd ((1,2),(3,4)))"), Value::Int(3));
    assert_eq!(eval("(1+1, 2*2)"),
               Value::Pair(Box::new(Value::Int(2)), Box::new(Value::Int(4))));
}

#[test]
fn let_scopes_lexically() {
    assert_eq!(eval("let val x=3 in let val y=x*2 in 10*x+y end end"),
               Value::Int(36));
    assert_eq!(eval("let val x=1 in let val x=2 in x end end"), Value::Int(2));
}

#[test]
fn closures_capture_their_defining_scope() {
    let source = "let val x = 10 in \
                  let val f = fn y => x + y in \
                  let val x = 0 in f 5 end end end";
    assert_eq!(eval(source), Value::Int(15));
}

#[test]
fn curried_application_is_left_associative() {
    assert_eq!(eval("(fn x => fn y => x*10+y) 3 4"), Value::Int(34));
}

#[test]
fn single_recursion_works() {
    assert_eq!(eval("let fun f x = if x=0 then 1 else x*(f (x-1)) in f 5 end"),
               Value::Int(120));
    assert_eq!(eval("let fun fib x = if x=0 then 0 else if x=1 then 1 \
                     else (fib (x-1))+(fib (x-2)) in fib 10 end"),
               Value::Int(55));
}

#[test]
fn mutual_recursion_works_across_the_group() {
    let source = "let fun even n = if n=0 then true else odd (n-1) \
                  and odd n = if n=0 then false else even (n-1) \
                  in (even 9, odd 9) end";
    assert_eq!(eval(source),
               Value::Pair(Box::new(Value::Bool(false)), Box::new(Value::Bool(true))));
}

#[test]
fn unbound_variables_fault() {
    assert!(matches!(fault("x + 1"),
                     Fault::Runtime(RuntimeError::UnboundVariable { .. })));
}

#[test]
fn zero_divisors_fault() {
    assert!(matches!(fault("1 div 0"),
                     Fault::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(fault("1 mod 0"),
                     Fault::Runtime(RuntimeError::ModuloByZero { .. })));
}

#[test]
fn overflow_faults_instead_of_wrapping() {
    assert!(matches!(fault("9223372036854775807 + 1"),
                     Fault::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(fault("(0 - 9223372036854775807 - 1) div (0 - 1)"),
                     Fault::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn type_mismatches_fault_with_the_offending_value() {
    assert!(matches!(fault("1 + true"),
                     Fault::Runtime(RuntimeError::ExpectedInt { .. })));
    assert!(matches!(fault("if 1 then 2 else 3"),
                     Fault::Runtime(RuntimeError::ExpectedBool { .. })));
    assert!(matches!(fault("fst 5"),
                     Fault::Runtime(RuntimeError::ExpectedPair { .. })));
    assert!(matches!(fault("5 6"),
                     Fault::Runtime(RuntimeError::ExpectedClosure { .. })));
}

#[test]
fn string_literals_parse_but_do_not_evaluate() {
    assert!(matches!(fault("\"hello\""),
                     Fault::Runtime(RuntimeError::Unimplemented { .. })));
}

#[test]
fn empty_and_trailing_input_fault() {
    assert!(matches!(fault(""), Fault::Parse(ParseError::EmptyInput)));
    assert!(matches!(fault("   (* nothing here *)  "),
                     Fault::Parse(ParseError::EmptyInput)));
    assert!(matches!(fault("1 + 2 then"),
                     Fault::Parse(ParseError::TrailingTokens { .. })));
    assert!(matches!(fault("(1, 2))"),
                     Fault::Parse(ParseError::TrailingTokens { .. })));
}

#[test]
fn lex_faults_surface_as_parse_errors() {
    assert!(matches!(fault("\"open"),
                     Fault::Parse(ParseError::UnterminatedString { .. })));
    assert!(matches!(fault("(* open"),
                     Fault::Parse(ParseError::UnterminatedComment { .. })));
    assert!(matches!(fault("1 + ~2"),
                     Fault::Parse(ParseError::UnexpectedCharacter { .. })));
}

#[test]
fn unknown_operator_runs_are_rejected_whole() {
    assert!(matches!(fault("1 <= 2"),
                     Fault::Parse(ParseError::TrailingTokens { .. })
                     | Fault::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn default_renderings_read_back_as_equal_values() {
    for source in ["5", "true", "false", "()", "(2,3)", "((1,2),(3,true))"] {
        let value = eval(source);
        assert_eq!(eval(&value.to_string()), value, "round-trip of '{source}'");
    }
}

#[test]
fn evaluation_is_idempotent_with_doubled_output() {
    let source = "(print 7; 7)";
    let mut out = Vec::new();
    let first = interpret_with(source, &mut out).unwrap();
    let second = interpret_with(source, &mut out).unwrap();
    assert_eq!(first, second);
    assert_eq!(String::from_utf8(out).unwrap(), "77");
}

#[test]
fn embedded_suite_passes_in_full() {
    let mut out = Vec::new();
    let report = run_suite(&mut out).unwrap();
    assert_eq!(report.passed, CASES.len());
    assert_eq!(report.failed(), 0);
    assert_eq!(report.unimplemented, 0);

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.ends_with("28 passed! 0 failed! 0 unimplemented!\n"));
}
