//! # Lifecycle Scenarios
//!
//! Sleep gating, message round trips, and dead-state permanence observed
//! across multiple blocks.

#[cfg(test)]
mod tests {
    use crate::integration::init_tracing;
    use sim_contract::adapters::scripted::{ScriptedEngine, ScriptedStep};
    use sim_contract::{ContractConfig, ExecState};
    use sim_runtime::Simulator;
    use sim_types::message::{hex_to_text, hex_to_words, text_to_hex, words_to_hex};
    use sim_types::{OutgoingTransaction, UserTransaction};

    const PROGRAM: &str = "^declare a\nstart:\nSET @a #0000000000000001\nSLP #04\nFIN";

    fn message_tx(recipient: u64, amount: i64, block: u32, text: &str) -> UserTransaction {
        UserTransaction {
            sender: 1,
            recipient,
            amount,
            blockheight: block,
            message_text: Some(text.to_string()),
            message_hex: None,
        }
    }

    #[test]
    fn test_sleep_refuses_progress_until_expiry_block() {
        init_tracing();
        let mut sim = Simulator::new(ScriptedEngine::with_steps(vec![
            ScriptedStep::Sleep(4),
            ScriptedStep::Finish,
        ]));
        let config = ContractConfig {
            activation_amount: 0,
            ..ContractConfig::default()
        };
        let id = sim.deploy_contract(PROGRAM, &config);

        // Round 1 (block 2): the program goes to sleep until block 4.
        sim.forge_block();
        assert_eq!(
            sim.contract(id).unwrap().state(),
            ExecState::Sleeping { until: 4 }
        );

        // Round 2 (block 3): still sleeping; the run gate reports it and
        // the zero-activation reactivation must not cut the sleep short.
        sim.forge_block();
        assert_eq!(
            sim.contract(id).unwrap().state(),
            ExecState::Sleeping { until: 4 }
        );
        let status = sim.run_contract(id, &[]).unwrap();
        assert!(status.contains("sleeping"), "unexpected status: {status}");

        // Round 3 (block 4): sleep expires, the program resumes and ends.
        sim.forge_block();
        assert_eq!(sim.contract(id).unwrap().state(), ExecState::Finished);
    }

    #[test]
    fn test_message_round_trip_through_ledger() {
        init_tracing();
        let pong_words = hex_to_words(&text_to_hex("pong").unwrap()).unwrap();
        let mut sim = Simulator::new(ScriptedEngine::with_steps(vec![
            ScriptedStep::EnqueueTx(OutgoingTransaction {
                recipient: 200,
                amount: 1,
                message_words: pong_words,
            }),
            ScriptedStep::Finish,
        ]));
        let config = ContractConfig {
            activation_amount: 0,
            ..ContractConfig::default()
        };
        let id = sim.deploy_contract(PROGRAM, &config);

        sim.queue_transactions([message_tx(100, 5, 1, "ping")]);
        sim.forge_block();

        // Ingestion derived the words from the request text.
        let incoming = sim
            .chain()
            .log()
            .iter()
            .find(|tx| tx.recipient == 100)
            .unwrap();
        assert_eq!(incoming.message_text.as_deref(), Some("ping"));
        assert_eq!(hex_to_text(&words_to_hex(&incoming.message_words)).unwrap(), "ping");

        // Dispatch derived both forms back from the contract's words.
        let outgoing = sim.chain().log().iter().find(|tx| tx.sender == id).unwrap();
        assert_eq!(outgoing.message_text.as_deref(), Some("pong"));
        assert_eq!(outgoing.message_hex.as_deref().map(str::len), Some(64));
    }

    #[test]
    fn test_dead_contract_consumes_funding_but_never_wakes() {
        init_tracing();
        let mut sim = Simulator::new(ScriptedEngine::with_steps(vec![ScriptedStep::Fault]));
        let id = sim.deploy_contract(PROGRAM, &ContractConfig::default());

        sim.forge_block();
        assert_eq!(sim.contract(id).unwrap().state(), ExecState::Dead);

        // Keep funding it for several blocks: the activation scan still
        // consumes each qualifying transaction, but nothing resurrects.
        for _ in 0..3 {
            sim.queue_transactions([message_tx(id, 10, sim.chain().current_block(), "wake up")]);
            sim.forge_block();
            assert_eq!(sim.contract(id).unwrap().state(), ExecState::Dead);
        }
        assert!(sim
            .chain()
            .log()
            .iter()
            .filter(|tx| tx.recipient == id)
            .all(|tx| tx.processed));
        let exception = &sim.contract(id).unwrap().exception;
        assert!(exception.contains("end of file"), "got: {exception}");
    }
}
