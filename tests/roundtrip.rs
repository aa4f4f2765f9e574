use blparse::ast::{Condition, Kind, Program, Statement};
use blparse::{parse_block_source, parse_program_source, parse_statement_source};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const CALL_NAMES: [&str; 7] = ["move", "turnleft", "skip", "infect", "step", "look-around", "go2"];
const INSTRUCTION_NAMES: [&str; 5] = ["step", "look-around", "go2", "Spin", "zig-zag"];

fn random_call(rng: &mut StdRng) -> Statement {
    let mut s = Statement::new();
    s.assemble_call(CALL_NAMES.choose(rng).unwrap());
    s
}

fn random_condition(rng: &mut StdRng) -> Condition {
    *Condition::ALL.choose(rng).unwrap()
}

fn random_block(rng: &mut StdRng, depth: usize) -> Statement {
    let mut block = Statement::new();
    for _ in 0..rng.gen_range(0..4) {
        let mut s = random_statement(rng, depth);
        let pos = rng.gen_range(0..=block.length_of_block());
        block.add_to_block(pos, &mut s);
        assert!(s.is_empty_block());
    }
    block
}

fn random_statement(rng: &mut StdRng, depth: usize) -> Statement {
    let choice = if depth == 0 { 3 } else { rng.gen_range(0..4) };
    let mut s = Statement::new();

    match choice {
        0 => {
            let mut body = random_block(rng, depth - 1);
            s.assemble_if(random_condition(rng), &mut body);
        }
        1 => {
            let mut then_body = random_block(rng, depth - 1);
            let mut else_body = random_block(rng, depth - 1);
            s.assemble_if_else(random_condition(rng), &mut then_body, &mut else_body);
        }
        2 => {
            let mut body = random_block(rng, depth - 1);
            s.assemble_while(random_condition(rng), &mut body);
        }
        _ => s = random_call(rng),
    }
    s
}

fn random_program(rng: &mut StdRng) -> Program {
    let mut program = Program::new("Random");
    let count = rng.gen_range(0..=INSTRUCTION_NAMES.len());
    for name in INSTRUCTION_NAMES.choose_multiple(rng, count) {
        let mut body = random_block(rng, 3);
        program.define_instruction(name, &mut body).unwrap();
    }
    let mut body = random_block(rng, 4);
    program.swap_body(&mut body);
    program
}

#[test]
fn printed_statements_reparse_to_equal_trees() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..200 {
        let original = random_statement(&mut rng, 4);
        let printed = original.to_string();
        let reparsed = parse_statement_source(&printed)
            .unwrap_or_else(|e| panic!("failed to reparse:\n{}\n{}", printed, e));
        assert_eq!(reparsed, original, "printed form:\n{}", printed);
    }
}

#[test]
fn printed_blocks_reparse_to_equal_trees() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let original = random_block(&mut rng, 3);
        let reparsed = parse_block_source(&original.to_string()).unwrap();
        assert_eq!(reparsed, original);
    }
}

#[test]
fn printed_programs_reparse_to_equal_trees() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let original = random_program(&mut rng);
        let printed = original.to_string();
        let reparsed = parse_program_source(&printed)
            .unwrap_or_else(|e| panic!("failed to reparse:\n{}\n{}", printed, e));
        assert_eq!(reparsed, original, "printed form:\n{}", printed);
    }
}

#[test]
fn disassembling_random_trees_restores_parts() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let mut s = random_statement(&mut rng, 3);
        let snapshot = s.clone();

        match s.kind() {
            Kind::If => {
                let mut body = Statement::new();
                let c = s.disassemble_if(&mut body);
                assert_eq!(Some(c), snapshot.condition());
                assert_eq!(body, snapshot.children()[0]);
                s.assemble_if(c, &mut body);
            }
            Kind::IfElse => {
                let (mut then_body, mut else_body) = (Statement::new(), Statement::new());
                let c = s.disassemble_if_else(&mut then_body, &mut else_body);
                assert_eq!(then_body, snapshot.children()[0]);
                assert_eq!(else_body, snapshot.children()[1]);
                s.assemble_if_else(c, &mut then_body, &mut else_body);
            }
            Kind::While => {
                let mut body = Statement::new();
                let c = s.disassemble_while(&mut body);
                s.assemble_while(c, &mut body);
            }
            Kind::Call => {
                let name = s.disassemble_call();
                s.assemble_call(&name);
            }
            Kind::Block => unreachable!("random_statement never yields a BLOCK"),
        }

        assert_eq!(s, snapshot);
    }
}
