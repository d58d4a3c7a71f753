error_chain! {
    types {
        Error, ErrorKind, ChainErr, Result;
    }

    errors {
        DegenerateStepSize {
            description("Degenerate finite-difference step.")
            display("Finite-difference step is zero; the difference quotient is undefined.")
        }
    }
}
