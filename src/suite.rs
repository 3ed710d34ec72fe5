use std::io::{self, Write};

use crate::{
    error::{Fault, RuntimeError},
    interpret_with,
};

/// The embedded test programs, each with its expected default rendering.
pub const CASES: [(&str, &str); 28] =
    [("5", "5"),
     ("5+1", "6"),
     ("5-1", "4"),
     ("3*4", "12"),
     ("37 mod 10", "7"),
     ("37 div 10", "3"),
     ("print 5", "()"),
     ("(5;6;7;8)", "8"),
     ("(print 5;6)", "6"),
     ("(2,3)", "(2,3)"),
     ("fst (2,3)", "2"),
     ("snd (2,3)", "3"),
     ("true andalso false", "false"),
     ("false orelse true", "true"),
     ("false andalso (print 5; true)", "false"),
     ("true orelse (print 5; true)", "true"),
     ("let val x=5 in x+1 end", "6"),
     ("let val x=3 in let val y=x*2 in 10*x+y end end", "36"),
     ("(fn x => x+1) 5", "6"),
     ("(fn x => fn y => x*10+y) 3 4", "34"),
     ("let val f = fn x=> (x*2,x) in fst (f 3) end", "6"),
     ("let val f = fn x=> (x*2,x) in snd (f 3) end", "3"),
     ("(print (5+6); 8*9)", "72"),
     ("let fun f x = if x=0 then 1 else x*(f (x-1)) in (f 5) end", "120"),
     ("let fun f x = fn y => if x=0 then y else f (x div 10) (y*10 + x mod 10) \
       in (f 315 0) end",
      "513"),
     ("let fun f x = if x=0 then true else (g (x-1)) and g y = if y=0 \
       then false else (f (y-1)) in (f 10, f 11) end",
      "(true,false)"),
     ("(not (not true),not (not false))", "(true,false)"),
     ("let fun fib x = if x=0 then 0 else if x=1 then 1 else (fib (x-1))+(fib (x-2)) \
       in (fib 10) end",
      "55")];

/// Totals of one suite run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SuiteReport {
    /// Number of cases run.
    pub total:         usize,
    /// Cases whose result matched the expected rendering.
    pub passed:        usize,
    /// Cases that faulted with missing evaluation semantics.
    pub unimplemented: usize,
}

impl SuiteReport {
    /// Cases that neither passed nor hit unimplemented semantics.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.total - self.passed - self.unimplemented
    }
}

/// Runs every embedded case, writing per-case progress and the closing
/// totals line to `out`.
///
/// Anything a case prints goes to `out` as well, interleaved exactly
/// where the program produced it, so a case like `print 5` shows its
/// output in the middle of its progress line.
///
/// # Errors
/// Returns an `io::Error` only if writing the progress itself fails; a
/// failing case is counted, never an error.
pub fn run_suite(out: &mut dyn Write) -> io::Result<SuiteReport> {
    let mut report = SuiteReport::default();

    for (source, expected) in CASES {
        report.total += 1;
        write!(out, "\nTEST NO{}: {source}", report.total)?;

        match interpret_with(source, out) {
            Ok(value) if value.to_string() == expected => {
                write!(out, " => {expected}: passed.")?;
                report.passed += 1;
            },
            Ok(value) => {
                write!(out, " => failed:\n\tExpected: {expected}\n\tGot: {value}")?;
            },
            Err(fault @ Fault::Runtime(RuntimeError::Unimplemented { .. })) => {
                write!(out, " => {fault}")?;
                report.unimplemented += 1;
            },
            Err(fault) => {
                write!(out, " => failed:\n\t{fault}")?;
            },
        }
    }

    writeln!(out,
             "\n{} passed! {} failed! {} unimplemented!",
             report.passed,
             report.failed(),
             report.unimplemented)?;
    Ok(report)
}
